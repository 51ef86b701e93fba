//! Page navigation and the pagination value object.
//!
//! The current page is never stored. It is derived from the paged axis's
//! offset every time it is read, so it cannot drift from the data source.
//! Navigation turns a page transition into offset requests on the paged
//! axis and, with cell paging on, on the cell collection.
//!
//! Nothing here clamps pages. The pagination control disables its buttons
//! from [`PaginationState::can_next_page`] and
//! [`PaginationState::can_previous_page`], and the data source clamps or
//! rejects any offset that is still out of range.

use pagegrid_core::logging::targets;

use crate::config::{PagingAxis, PagingConfig, PagingPosition};
use crate::model::GridSources;

/// A requested change of page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTransition {
    /// Go to the given zero-based page.
    Goto(i64),
    /// Go one page forward.
    Next,
    /// Go one page back.
    Previous,
}

impl PageTransition {
    /// The page this transition leads to from `current`.
    pub fn apply(self, current: i64) -> i64 {
        match self {
            Self::Goto(page) => page,
            Self::Next => current.saturating_add(1),
            Self::Previous => current.saturating_sub(1),
        }
    }
}

/// Offsets issued by one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// The page navigated to.
    pub page: i64,
    /// The offset requested on the paged axis.
    pub axis_offset: i64,
    /// The offset requested on the cell collection, when cells are paged.
    pub cell_offset: Option<i64>,
    /// Whether the cell collection's offset moved as a result.
    pub cells_moved: bool,
}

/// The zero-based page containing `offset`.
///
/// A zero page size yields page 0. It is reachable through a configuration
/// built in code with `fixed_page_size = 0`, which only [`PagingConfig::validate`]
/// rejects.
pub fn current_page(offset: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    offset / page_size
}

/// Moves the grid to the page computed by `compute` from the current page.
///
/// Returns `None` without touching any collection when nothing is paged.
/// Offsets saturate at the `i64` range; the data source clamps or rejects
/// anything out of range.
pub fn navigate<F>(
    config: &PagingConfig,
    page_size: Option<usize>,
    sources: &GridSources<'_>,
    compute: F,
) -> Option<NavigationOutcome>
where
    F: FnOnce(i64) -> i64,
{
    let (Some(page_size), Some(axis)) = (page_size, sources.paged(config.paging_axis)) else {
        tracing::debug!(target: targets::NAVIGATION, axis = ?config.paging_axis, "navigation ignored, paging disabled");
        return None;
    };

    let current = saturating_i64(current_page(axis.offset(), page_size));
    let page = compute(current);

    let axis_offset = page.saturating_mul(saturating_i64(page_size));
    axis.set_offset(axis_offset);

    let mut cells_moved = false;
    let cell_offset = if config.page_cells {
        let across = sources
            .opposite(config.paging_axis)
            .map_or(0, |c| saturating_i64(c.len()));
        let offset = axis_offset.saturating_mul(across);
        let before = sources.cells.offset();
        sources.cells.set_offset(offset);
        cells_moved = sources.cells.offset() != before;
        Some(offset)
    } else {
        None
    };

    tracing::debug!(target: targets::NAVIGATION, current, page, axis_offset, ?cell_offset, cells_moved, "navigated");
    Some(NavigationOutcome {
        page,
        axis_offset,
        cell_offset,
        cells_moved,
    })
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Everything the pagination control needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based current page.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total items on the paged axis, 0 until known.
    pub number_of_items: usize,
    /// Whether a next page exists.
    pub can_next_page: bool,
    /// Whether a previous page exists.
    pub can_previous_page: bool,
    /// Where the control is placed.
    pub position: PagingPosition,
}

impl PaginationState {
    /// Builds the state for the paged axis, or `None` when nothing is paged.
    pub fn for_grid(
        config: &PagingConfig,
        page_size: Option<usize>,
        sources: &GridSources<'_>,
    ) -> Option<Self> {
        let page_size = page_size?;
        let axis = sources.paged(config.paging_axis)?;
        let page = current_page(axis.offset(), page_size);
        Some(Self {
            page,
            page_size,
            number_of_items: axis.total_count().unwrap_or(0),
            can_next_page: axis.has_more_items().unwrap_or(false),
            can_previous_page: page != 0,
            position: config.paging_position,
        })
    }

    /// Whether a control is rendered above the grid.
    pub fn shows_top(&self) -> bool {
        self.position.is_top()
    }

    /// Whether a control is rendered below the grid.
    pub fn shows_bottom(&self) -> bool {
        self.position.is_bottom()
    }

    /// Number of pages, when the total is known.
    pub fn page_count(&self) -> usize {
        self.number_of_items.div_ceil(self.page_size.max(1))
    }
}

/// Whether `axis` shows a pagination control at all.
pub fn has_pagination(axis: PagingAxis, position: PagingPosition) -> bool {
    axis.is_paged() && position != PagingPosition::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PagedCollection, VecCollection};

    #[test]
    fn test_transitions() {
        assert_eq!(PageTransition::Goto(7).apply(2), 7);
        assert_eq!(PageTransition::Next.apply(2), 3);
        assert_eq!(PageTransition::Previous.apply(2), 1);
        assert_eq!(PageTransition::Previous.apply(0), -1);
        assert_eq!(PageTransition::Next.apply(i64::MAX), i64::MAX);
        assert_eq!(PageTransition::Previous.apply(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_current_page_is_floor() {
        for page_size in 1..12 {
            for offset in 0..60 {
                assert_eq!(current_page(offset, page_size), offset / page_size);
            }
        }
        assert_eq!(current_page(25, 10), 2);
        assert_eq!(current_page(25, 0), 0);
    }

    #[test]
    fn test_navigate_rows_with_cells() {
        let rows = VecCollection::loaded((0..100).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1, 2, 3, 4]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_fixed_page_size(10)
            .with_page_cells(true);

        let outcome = navigate(&config, Some(10), &sources, |p| PageTransition::Goto(3).apply(p))
            .unwrap();
        assert_eq!(outcome.page, 3);
        assert_eq!(rows.offset(), 30);
        assert_eq!(cells.offset(), 120);
        assert_eq!(outcome.cell_offset, Some(120));
        assert!(outcome.cells_moved);
    }

    #[test]
    fn test_navigate_to_same_page_leaves_cells_in_place() {
        let rows = VecCollection::loaded((0..40).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1, 2, 3]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_fixed_page_size(10)
            .with_page_cells(true);

        let outcome = navigate(&config, Some(10), &sources, |p| p).unwrap();
        assert_eq!(outcome.cell_offset, Some(0));
        assert!(!outcome.cells_moved);

        let outcome = navigate(&config, Some(10), &sources, |p| p - 1).unwrap();
        assert_eq!(outcome.cell_offset, Some(-30));
        assert!(!outcome.cells_moved);
        assert_eq!(cells.offset(), 0);
    }

    #[test]
    fn test_navigate_far_page_saturates() {
        let rows = VecCollection::loaded((0..40).collect::<Vec<u32>>());
        let columns = VecCollection::loaded(vec![1, 2, 3]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_fixed_page_size(10)
            .with_page_cells(true);

        let far = i64::MAX / 5;
        let outcome = navigate(&config, Some(10), &sources, |_| far).unwrap();
        assert_eq!(outcome.page, far);
        assert_eq!(outcome.axis_offset, i64::MAX);
        assert_eq!(outcome.cell_offset, Some(i64::MAX));

        let outcome = navigate(&config, Some(usize::MAX), &sources, |_| -far).unwrap();
        assert_eq!(outcome.axis_offset, i64::MIN);
        assert_eq!(outcome.cell_offset, Some(i64::MIN));
    }

    #[test]
    fn test_navigate_columns_scales_cells_by_rows() {
        let rows = VecCollection::loaded(vec!['a', 'b', 'c']);
        let columns = VecCollection::loaded((0..7).collect::<Vec<u32>>());
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Column)
            .with_fixed_page_size(2)
            .with_page_cells(true);

        navigate(&config, Some(2), &sources, |p| PageTransition::Next.apply(p));
        assert_eq!(columns.offset(), 2);
        assert_eq!(cells.offset(), 6);
    }

    #[test]
    fn test_navigate_without_paging_is_noop() {
        let rows = VecCollection::loaded(vec![1, 2, 3]);
        let columns = VecCollection::loaded(vec![1]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);

        let revision = rows.revision();
        assert!(navigate(&PagingConfig::new(), None, &sources, |p| p + 1).is_none());
        assert_eq!(rows.revision(), revision);
    }

    #[test]
    fn test_pagination_state() {
        let rows = VecCollection::loaded((0..45).collect::<Vec<u32>>());
        rows.request_total_count(true);
        let columns = VecCollection::loaded(vec![1]);
        let cells = VecCollection::<u32>::new(Vec::new());
        let sources = GridSources::new(&rows, &columns, &cells);
        let config = PagingConfig::new()
            .with_paging_axis(PagingAxis::Row)
            .with_fixed_page_size(10)
            .with_paging_position(PagingPosition::Top);

        rows.set_limit(crate::model::Limit::Bounded(10));
        rows.set_offset(20);
        rows.resolve();

        let state = PaginationState::for_grid(&config, Some(10), &sources).unwrap();
        assert_eq!(state.page, 2);
        assert_eq!(state.number_of_items, 45);
        assert_eq!(state.page_count(), 5);
        assert!(state.can_next_page);
        assert!(state.can_previous_page);
        assert!(state.shows_top());
        assert!(!state.shows_bottom());
    }

    #[test]
    fn test_has_pagination() {
        assert!(has_pagination(PagingAxis::Row, PagingPosition::Both));
        assert!(!has_pagination(PagingAxis::None, PagingPosition::Both));
        assert!(!has_pagination(PagingAxis::Column, PagingPosition::None));
    }
}
