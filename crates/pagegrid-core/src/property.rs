//! Property system for pagegrid.
//!
//! This module provides two small reactive primitives:
//!
//! - **Property<T>**: An interior-mutable value whose setter reports whether
//!   the value actually changed, so the owner can emit a notification signal.
//! - **Watched<T>**: The last observed value of an effect dependency. An
//!   effect re-runs only when [`Watched::update`] reports a change, which is
//!   how the controller decides which synchronization steps apply in a
//!   reaction cycle.
//!
//! # Example
//!
//! ```
//! use pagegrid_core::{Property, Signal};
//!
//! struct Status {
//!     loading: Property<bool>,
//!     loading_changed: Signal<bool>,
//! }
//!
//! impl Status {
//!     fn set_loading(&self, loading: bool) {
//!         if self.loading.set(loading) {
//!             self.loading_changed.emit(loading);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

/// The last observed value of an effect dependency.
///
/// A fresh `Watched` has observed nothing, so the first [`update`](Self::update)
/// always reports a change. This matches effects that must run once when the
/// grid is first mounted and afterwards only when an input moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Watched<T> {
    last: Option<T>,
}

impl<T> Default for Watched<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq> Watched<T> {
    /// Create a watcher that has not observed any value yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value`, returning `true` if it differs from the previous observation.
    pub fn update(&mut self, value: T) -> bool {
        if self.last.as_ref() == Some(&value) {
            false
        } else {
            self.last = Some(value);
            true
        }
    }

    /// Forget the last observation so the next update reports a change.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_shared_across_threads() {
        let prop = Arc::new(Property::new(false));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let prop = prop.clone();
                std::thread::spawn(move || prop.set(true))
            })
            .collect();

        let changed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&changed| changed)
            .count();
        assert_eq!(changed, 1);
        assert!(prop.get());
    }

    #[test]
    fn test_watched_first_update_is_change() {
        let mut watched = Watched::new();

        assert!(watched.update(0u64));
        assert!(!watched.update(0u64));
        assert!(watched.update(1u64));
        assert!(!watched.update(1u64));
    }

    #[test]
    fn test_watched_reset() {
        let mut watched = Watched::new();
        watched.update(Some(10usize));
        watched.reset();
        assert!(watched.update(Some(10usize)));
    }
}
