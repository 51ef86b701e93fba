//! Offset/limit synchronization.
//!
//! The [`Synchronizer`] applies the effects that keep the three collections
//! in step with the resolved page size. It runs once per reaction cycle,
//! after configuration has settled and before the next view is read. Each
//! effect fires only when one of its inputs moved since the previous cycle;
//! the first cycle counts as a change for all of them.
//!
//! Effects run in this order:
//!
//! 1. **Page size**: refresh the paged axis's total count, reset its offset
//!    to 0 in dynamic mode, and set its limit to the page size.
//! 2. **Axis clamp**: when the paged axis or its handle changed, refresh the
//!    total count and bound an unbounded limit to the page size.
//! 3. **Cell limit**: with cell paging on, the cell limit must equal the page
//!    size times the item count of the opposite axis. Zero is applied too.
//! 4. **Cell readiness**: when the cell handle changed, report whether it is
//!    available with a non-zero limit.
//!
//! Every effect reads the handles' current state rather than remembering
//! what it last requested, so out-of-order answers from the data layer are
//! corrected on the next cycle.

use pagegrid_core::logging::targets;
use pagegrid_core::Watched;

use crate::config::{PageSizeMode, PagingAxis, PagingConfig};
use crate::model::{GridSources, Limit, LoadStatus};

/// What a reaction cycle observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    /// The page size changed this cycle.
    pub page_size_changed: bool,
    /// The cell limit was rewritten this cycle.
    pub cell_limit_applied: Option<usize>,
    /// The cell handle changed and is ready to display.
    pub cells_ready: bool,
}

/// Dependency bookkeeping for the synchronization effects.
#[derive(Debug, Default)]
pub struct Synchronizer {
    page_size: Watched<Option<usize>>,
    axis_handle: Watched<(PagingAxis, Option<u64>)>,
    cell_handle: Watched<u64>,
}

impl Synchronizer {
    /// Creates a synchronizer that has not seen any cycle yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all observations; the next cycle behaves like the first.
    pub fn reset(&mut self) {
        self.page_size.reset();
        self.axis_handle.reset();
        self.cell_handle.reset();
    }

    /// Runs one reaction cycle.
    pub fn apply(
        &mut self,
        config: &PagingConfig,
        page_size: Option<usize>,
        sources: &GridSources<'_>,
    ) -> SyncOutcome {
        let page_size_changed = self.page_size.update(page_size);
        if page_size_changed {
            Self::apply_page_size(config, page_size, sources);
        }

        let axis = config.paging_axis;
        let axis_revision = sources.paged(axis).map(|c| c.revision());
        if self.axis_handle.update((axis, axis_revision)) {
            Self::clamp_axis(axis, page_size, sources);
        }

        let cell_limit_applied = if config.page_cells {
            Self::apply_cell_limit(axis, page_size, sources)
        } else {
            None
        };

        let cells_ready = self.cell_handle.update(sources.cells.revision())
            && sources.cells.status() == LoadStatus::Available
            && !sources.cells.limit().is_zero();

        SyncOutcome {
            page_size_changed,
            cell_limit_applied,
            cells_ready,
        }
    }

    fn apply_page_size(config: &PagingConfig, page_size: Option<usize>, sources: &GridSources<'_>) {
        let (Some(page_size), Some(collection)) = (page_size, sources.paged(config.paging_axis))
        else {
            return;
        };
        tracing::debug!(target: targets::SYNC, page_size, axis = ?config.paging_axis, "page size changed");
        collection.request_total_count(true);
        if config.page_size_mode == PageSizeMode::Dynamic {
            collection.set_offset(0);
        }
        collection.set_limit(Limit::Bounded(page_size));
    }

    fn clamp_axis(axis: PagingAxis, page_size: Option<usize>, sources: &GridSources<'_>) {
        let Some(collection) = sources.paged(axis) else {
            return;
        };
        collection.request_total_count(true);
        if let (Limit::Unbounded, Some(page_size)) = (collection.limit(), page_size) {
            tracing::debug!(target: targets::SYNC, page_size, ?axis, "bounding unpaged axis");
            collection.set_limit(Limit::Bounded(page_size));
        }
    }

    fn apply_cell_limit(
        axis: PagingAxis,
        page_size: Option<usize>,
        sources: &GridSources<'_>,
    ) -> Option<usize> {
        let page_size = page_size?;
        let across = sources.opposite(axis)?.len();
        let limit = page_size.saturating_mul(across);
        if sources.cells.limit() == Limit::Bounded(limit) {
            return None;
        }
        tracing::debug!(target: targets::SYNC, limit, page_size, across, "setting cell limit");
        sources.cells.set_limit(Limit::Bounded(limit));
        Some(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PagedCollection, VecCollection};

    fn rows_paged(page_size: usize) -> PagingConfig {
        PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_fixed_page_size(page_size)
            .with_page_cells(true)
    }

    #[test]
    fn test_first_cycle_bounds_axis_and_cells() {
        let rows = VecCollection::loaded((0..40).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec!["a", "b", "c", "d", "e"]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = rows_paged(20);

        let mut sync = Synchronizer::new();
        let outcome = sync.apply(&config, Some(20), &sources);

        assert!(outcome.page_size_changed);
        assert_eq!(rows.limit(), Limit::Bounded(20));
        assert_eq!(cells.limit(), Limit::Bounded(100));
        assert_eq!(outcome.cell_limit_applied, Some(100));
        assert!(!outcome.cells_ready);
    }

    #[test]
    fn test_cell_limit_follows_opposite_count_to_zero() {
        let rows = VecCollection::loaded((0..40).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1, 2, 3, 4, 5]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = rows_paged(20);

        let mut sync = Synchronizer::new();
        sync.apply(&config, Some(20), &sources);
        assert_eq!(cells.limit(), Limit::Bounded(100));

        columns.set_items(Vec::new());
        columns.resolve();
        let outcome = sync.apply(&config, Some(20), &sources);
        assert_eq!(outcome.cell_limit_applied, Some(0));
        assert_eq!(cells.limit(), Limit::Bounded(0));

        let outcome = sync.apply(&config, Some(20), &sources);
        assert_eq!(outcome.cell_limit_applied, None);
    }

    #[test]
    fn test_huge_page_size_saturates_cell_limit() {
        let rows = VecCollection::loaded(vec![1, 2]);
        let columns = VecCollection::loaded(vec![1, 2, 3]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);

        let outcome = Synchronizer::new().apply(&rows_paged(usize::MAX), Some(usize::MAX), &sources);
        assert_eq!(outcome.cell_limit_applied, Some(usize::MAX));
        assert_eq!(rows.limit(), Limit::Bounded(usize::MAX));
    }

    #[test]
    fn test_cell_limit_untouched_without_cell_paging() {
        let rows = VecCollection::loaded(vec![1, 2]);
        let columns = VecCollection::loaded(vec![1, 2]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = rows_paged(2).with_page_cells(false);

        Synchronizer::new().apply(&config, Some(2), &sources);
        assert_eq!(cells.limit(), Limit::Unbounded);
    }

    #[test]
    fn test_fixed_mode_page_size_change_keeps_offset() {
        let rows = VecCollection::loaded((0..100).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);

        let mut sync = Synchronizer::new();
        sync.apply(&rows_paged(10), Some(10), &sources);
        rows.set_offset(30);

        sync.apply(&rows_paged(15), Some(15), &sources);
        assert_eq!(rows.offset(), 30);
        assert_eq!(rows.limit(), Limit::Bounded(15));
    }

    #[test]
    fn test_dynamic_mode_page_size_change_resets_offset() {
        let rows = VecCollection::loaded((0..100).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_dynamic_page_size(None);

        let mut sync = Synchronizer::new();
        sync.apply(&config, Some(10), &sources);
        rows.set_offset(40);

        sync.apply(&config, Some(5), &sources);
        assert_eq!(rows.offset(), 0);
        assert_eq!(rows.limit(), Limit::Bounded(5));
    }

    #[test]
    fn test_axis_switch_bounds_new_axis() {
        let rows = VecCollection::loaded((0..10).collect::<Vec<u32>>());
        let columns = VecCollection::loaded((0..10).collect::<Vec<u32>>());
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);

        let mut sync = Synchronizer::new();
        sync.apply(&rows_paged(4), Some(4), &sources);
        assert_eq!(columns.limit(), Limit::Unbounded);

        let config = rows_paged(4).with_paging_axis(PagingAxis::Column);
        sync.apply(&config, Some(4), &sources);
        assert_eq!(columns.limit(), Limit::Bounded(4));
        assert_eq!(cells.limit(), Limit::Bounded(4 * rows.len()));
    }

    #[test]
    fn test_unpaged_grid_is_left_alone() {
        let rows = VecCollection::loaded(vec![1, 2, 3]);
        let columns = VecCollection::loaded(vec![1, 2, 3]);
        let cells = VecCollection::loaded(vec![0; 9]);
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new().with_page_cells(true);

        let outcome = Synchronizer::new().apply(&config, None, &sources);
        assert_eq!(rows.limit(), Limit::Unbounded);
        assert_eq!(columns.limit(), Limit::Unbounded);
        assert_eq!(cells.limit(), Limit::Unbounded);
        assert!(outcome.cells_ready);
    }

    #[test]
    fn test_cells_ready_only_on_new_cell_revision() {
        let rows = VecCollection::loaded(vec![1, 2]);
        let columns = VecCollection::loaded(vec![1, 2]);
        let cells = VecCollection::loaded(vec![0; 4]);
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new();

        let mut sync = Synchronizer::new();
        assert!(sync.apply(&config, None, &sources).cells_ready);
        assert!(!sync.apply(&config, None, &sources).cells_ready);

        cells.set_offset(2);
        assert!(!sync.apply(&config, None, &sources).cells_ready);
        cells.resolve();
        assert!(sync.apply(&config, None, &sources).cells_ready);
    }
}
