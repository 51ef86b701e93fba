//! The paged-collection seam between the controller and the data layer.
//!
//! The controller never owns data sources. The data-access layer lends it
//! one [`PagedCollection`] per axis for each reaction cycle or user event,
//! bundled in [`GridSources`].

use crate::config::PagingAxis;

/// The requested window length of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit {
    /// At most this many items.
    Bounded(usize),
    /// No window; every item is requested.
    #[default]
    Unbounded,
}

impl Limit {
    /// Returns `true` for [`Limit::Unbounded`].
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` for a bounded limit of zero.
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Bounded(0))
    }

    /// The bound, if any.
    pub fn bound(self) -> Option<usize> {
        match self {
            Self::Bounded(n) => Some(n),
            Self::Unbounded => None,
        }
    }
}

/// Loading status reported by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadStatus {
    /// A request is in flight; items may be stale or absent.
    #[default]
    Loading,
    /// Items reflect the current offset and limit.
    Available,
    /// The source failed or is not accessible.
    Unavailable,
}

/// A mutable, externally owned, paged data source.
///
/// Mutators take `&self`; implementations use interior mutability so the
/// same handle can be shared between the data layer and the controller.
/// Requests issued through [`set_offset`](Self::set_offset) and
/// [`set_limit`](Self::set_limit) supersede any earlier request still in
/// flight, and the result is observed later through [`status`](Self::status).
///
/// # Example
///
/// ```
/// use pagegrid::model::{Limit, LoadStatus, PagedCollection, VecCollection};
///
/// let rows = VecCollection::new((0..50).collect::<Vec<u32>>());
/// rows.set_limit(Limit::Bounded(10));
/// rows.set_offset(20);
/// rows.resolve();
///
/// assert_eq!(rows.status(), LoadStatus::Available);
/// assert_eq!(rows.items().unwrap().first(), Some(&20));
/// assert_eq!(rows.has_more_items(), Some(true));
/// ```
pub trait PagedCollection: Send + Sync {
    /// Number of items currently held, or `None` while items are absent.
    fn item_count(&self) -> Option<usize>;

    /// Index of the first requested item.
    fn offset(&self) -> usize;

    /// Requested window length.
    fn limit(&self) -> Limit;

    /// Total number of items in the source, if it has been requested and is known.
    fn total_count(&self) -> Option<usize>;

    /// Whether items exist beyond the current window, once known.
    fn has_more_items(&self) -> Option<bool>;

    /// Current loading status.
    fn status(&self) -> LoadStatus;

    /// Changes whenever the collection publishes a new state.
    ///
    /// Two equal revisions mean the controller has nothing new to react to.
    fn revision(&self) -> u64;

    /// Requests a new window start.
    ///
    /// Negative values are passed through unchanged; the source decides
    /// whether to clamp or reject them.
    fn set_offset(&self, offset: i64);

    /// Requests a new window length.
    fn set_limit(&self, limit: Limit);

    /// Asks the source to compute [`total_count`](Self::total_count).
    ///
    /// With `refresh` set, a previously known count is recomputed.
    fn request_total_count(&self, refresh: bool);

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Number of items held, treating absent items as empty.
    fn len(&self) -> usize {
        self.item_count().unwrap_or(0)
    }

    /// Returns `true` when no items are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The three collections a grid is built from, lent for one call.
#[derive(Clone, Copy)]
pub struct GridSources<'a> {
    /// Row items.
    pub rows: &'a dyn PagedCollection,
    /// Column items.
    pub columns: &'a dyn PagedCollection,
    /// Row × column cell items.
    pub cells: &'a dyn PagedCollection,
}

impl<'a> GridSources<'a> {
    /// Bundles the three collections.
    pub fn new(
        rows: &'a dyn PagedCollection,
        columns: &'a dyn PagedCollection,
        cells: &'a dyn PagedCollection,
    ) -> Self {
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// The collection paged along `axis`.
    pub fn paged(&self, axis: PagingAxis) -> Option<&'a dyn PagedCollection> {
        match axis {
            PagingAxis::Row => Some(self.rows),
            PagingAxis::Column => Some(self.columns),
            PagingAxis::None => None,
        }
    }

    /// The collection across from `axis`, whose item count scales the cell window.
    pub fn opposite(&self, axis: PagingAxis) -> Option<&'a dyn PagedCollection> {
        match axis {
            PagingAxis::Row => Some(self.columns),
            PagingAxis::Column => Some(self.rows),
            PagingAxis::None => None,
        }
    }
}

impl std::fmt::Debug for GridSources<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSources")
            .field("rows", &self.rows.revision())
            .field("columns", &self.columns.revision())
            .field("cells", &self.cells.revision())
            .finish()
    }
}
