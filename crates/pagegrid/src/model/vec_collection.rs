//! In-memory paged collection.
//!
//! `VecCollection<T>` serves windows of a `Vec<T>` through the
//! [`PagedCollection`] interface. Requests move it to
//! [`LoadStatus::Loading`]; [`VecCollection::resolve`] plays the part of the
//! data source answering them. Hosts backed by a remote source implement
//! `PagedCollection` themselves; this type covers local data and tests.

use parking_lot::RwLock;

use pagegrid_core::logging::targets;
use pagegrid_core::Signal;

use super::traits::{Limit, LoadStatus, PagedCollection};

#[derive(Debug)]
struct State<T> {
    offset: usize,
    limit: Limit,
    status: LoadStatus,
    window: Option<Vec<T>>,
    has_more_items: Option<bool>,
    total_count: Option<usize>,
    total_requested: bool,
    revision: u64,
}

impl<T> State<T> {
    fn touch(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

/// A paged collection over an in-memory vector.
///
/// # Signals
///
/// - `changed(u64)`: Emitted with the new revision whenever the collection
///   publishes a new state. Hosts connect it to schedule a controller
///   reaction cycle.
pub struct VecCollection<T> {
    source: RwLock<Vec<T>>,
    state: RwLock<State<T>>,

    /// Emitted with the new revision after every published change.
    pub changed: Signal<u64>,
}

impl<T: Clone + Send + Sync + 'static> VecCollection<T> {
    /// Creates a collection that has not loaded yet.
    ///
    /// The window starts at offset 0 with an unbounded limit and no items.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            source: RwLock::new(items),
            state: RwLock::new(State {
                offset: 0,
                limit: Limit::Unbounded,
                status: LoadStatus::Loading,
                window: None,
                has_more_items: None,
                total_count: None,
                total_requested: false,
                revision: 0,
            }),
            changed: Signal::new(),
        }
    }

    /// Creates a collection and loads its first window immediately.
    pub fn loaded(items: Vec<T>) -> Self {
        let collection = Self::new(items);
        collection.resolve();
        collection
    }

    /// The items of the current window, or `None` while absent.
    pub fn items(&self) -> Option<Vec<T>> {
        self.state.read().window.clone()
    }

    /// Answers the outstanding request: loads the window for the current
    /// offset and limit and marks the collection available.
    pub fn resolve(&self) {
        let revision = {
            let source = self.source.read();
            let mut state = self.state.write();
            let start = state.offset.min(source.len());
            let end = match state.limit {
                Limit::Bounded(n) => start.saturating_add(n).min(source.len()),
                Limit::Unbounded => source.len(),
            };
            state.window = Some(source[start..end].to_vec());
            state.has_more_items = Some(end < source.len());
            if state.total_requested {
                state.total_count = Some(source.len());
            }
            state.status = LoadStatus::Available;
            state.touch()
        };
        tracing::trace!(target: targets::COLLECTION, revision, "collection resolved");
        self.changed.emit(revision);
    }

    /// Marks the outstanding request as failed.
    pub fn fail(&self) {
        let revision = {
            let mut state = self.state.write();
            state.status = LoadStatus::Unavailable;
            state.window = None;
            state.has_more_items = None;
            state.touch()
        };
        tracing::debug!(target: targets::COLLECTION, revision, "collection unavailable");
        self.changed.emit(revision);
    }

    /// Replaces the backing items. The current window must be resolved again.
    pub fn set_items(&self, items: Vec<T>) {
        *self.source.write() = items;
        let revision = {
            let mut state = self.state.write();
            state.status = LoadStatus::Loading;
            state.touch()
        };
        self.changed.emit(revision);
    }

    /// Number of backing items, regardless of the window.
    pub fn source_len(&self) -> usize {
        self.source.read().len()
    }

    fn request(&self, apply: impl FnOnce(&mut State<T>) -> bool) {
        let revision = {
            let mut state = self.state.write();
            if !apply(&mut *state) {
                return;
            }
            state.status = LoadStatus::Loading;
            state.touch()
        };
        self.changed.emit(revision);
    }
}

impl<T: Clone + Send + Sync + 'static> PagedCollection for VecCollection<T> {
    fn item_count(&self) -> Option<usize> {
        self.state.read().window.as_ref().map(Vec::len)
    }

    fn offset(&self) -> usize {
        self.state.read().offset
    }

    fn limit(&self) -> Limit {
        self.state.read().limit
    }

    fn total_count(&self) -> Option<usize> {
        self.state.read().total_count
    }

    fn has_more_items(&self) -> Option<bool> {
        self.state.read().has_more_items
    }

    fn status(&self) -> LoadStatus {
        self.state.read().status
    }

    fn revision(&self) -> u64 {
        self.state.read().revision
    }

    fn set_offset(&self, offset: i64) {
        let clamped = usize::try_from(offset).unwrap_or(0);
        if clamped as i64 != offset {
            tracing::debug!(target: targets::COLLECTION, offset, "negative offset clamped to 0");
        }
        self.request(|state| {
            if state.offset == clamped {
                return false;
            }
            state.offset = clamped;
            true
        });
    }

    fn set_limit(&self, limit: Limit) {
        self.request(|state| {
            if state.limit == limit {
                return false;
            }
            state.limit = limit;
            true
        });
    }

    fn request_total_count(&self, refresh: bool) {
        let len = self.source.read().len();
        let revision = {
            let mut state = self.state.write();
            let first_request = !state.total_requested;
            state.total_requested = true;
            if state.status != LoadStatus::Available || !(refresh || first_request) {
                return;
            }
            if state.total_count == Some(len) {
                return;
            }
            state.total_count = Some(len);
            state.touch()
        };
        self.changed.emit(revision);
    }
}

impl<T> std::fmt::Debug for VecCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("VecCollection")
            .field("len", &self.source.read().len())
            .field("offset", &state.offset)
            .field("limit", &state.limit)
            .field("status", &state.status)
            .field("revision", &state.revision)
            .finish()
    }
}
