//! The pagination and layout controller.
//!
//! [`GridController`] ties page-size resolution, offset/limit
//! synchronization, navigation and column widths together for one grid. It
//! holds no collections; the host lends them for each call through
//! [`GridSources`].
//!
//! # Driving the controller
//!
//! - Call [`GridController::react`] once per reaction cycle, whenever a
//!   collection publishes a change or the configuration changes.
//! - Call [`GridController::view`] to read what the rendering layer needs.
//! - Forward user events to [`goto_page`](GridController::goto_page),
//!   [`next_page`](GridController::next_page),
//!   [`previous_page`](GridController::previous_page) and
//!   [`set_column_width`](GridController::set_column_width).
//!
//! # Example
//!
//! ```
//! use pagegrid::model::{GridSources, Limit, PagedCollection, VecCollection};
//! use pagegrid::{GridController, PagingAxis, PagingConfig};
//!
//! let rows = VecCollection::loaded((0..30).collect::<Vec<u32>>());
//! let columns = VecCollection::loaded(vec!["a", "b", "c"]);
//! let cells = VecCollection::<u32>::new((0..90).collect());
//! let sources = GridSources::new(&rows, &columns, &cells);
//!
//! let config = PagingConfig::new()
//!     .with_paging_axis(PagingAxis::Row)
//!     .with_fixed_page_size(10)
//!     .with_page_cells(true);
//! let mut grid = GridController::new(config);
//!
//! grid.react(&sources);
//! assert_eq!(rows.limit(), Limit::Bounded(10));
//! assert_eq!(cells.limit(), Limit::Bounded(30));
//!
//! grid.next_page(&sources);
//! assert_eq!(rows.offset(), 10);
//! assert_eq!(cells.offset(), 30);
//! assert!(grid.is_loading());
//! ```

use pagegrid_core::logging::{span_names, targets};
use pagegrid_core::{grid_trace, grid_warn, PerfSpan, Property, Signal, Watched};

use crate::config::PagingConfig;
use crate::layout::{ColumnWidths, WidthToken};
use crate::model::GridSources;
use crate::navigation::{self, NavigationOutcome, PageTransition, PaginationState};
use crate::page_size::resolve_page_size;
use crate::sync::Synchronizer;

/// What the rendering layer reads after a reaction cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    /// Zero-based current page, when paged.
    pub current_page: Option<usize>,
    /// Effective page size, when paged.
    pub page_size: Option<usize>,
    /// Whether cell data for the current page is still on its way.
    pub loading: bool,
    /// One width per column.
    pub column_widths: Vec<WidthToken>,
    /// The column widths as a grid track list.
    pub grid_template: String,
    /// Column count including the row header column, if shown.
    pub effective_column_count: usize,
    /// Whether the empty placeholder replaces the rows.
    pub show_empty_placeholder: bool,
    /// Pagination control state, when a control is shown.
    pub pagination: Option<PaginationState>,
}

/// Pagination and layout controller for one grid.
///
/// # Signals
///
/// - `page_requested(i64)`: Emitted with the target page after navigation
///   issued new offsets
/// - `loading_changed(bool)`: Emitted when the loading flag flips
/// - `column_widths_changed(Vec<WidthToken>)`: Emitted after a reset or a resize
pub struct GridController {
    config: PagingConfig,
    sync: Synchronizer,
    column_count: Watched<usize>,
    widths: ColumnWidths,
    loading: Property<bool>,

    /// Emitted with the target page after navigation.
    pub page_requested: Signal<i64>,
    /// Emitted when the loading flag changes.
    pub loading_changed: Signal<bool>,
    /// Emitted when the column widths change.
    pub column_widths_changed: Signal<Vec<WidthToken>>,
}

impl GridController {
    /// Creates a controller. Nothing is requested until the first [`react`](Self::react).
    pub fn new(config: PagingConfig) -> Self {
        Self {
            config,
            sync: Synchronizer::new(),
            column_count: Watched::new(),
            widths: ColumnWidths::default(),
            loading: Property::new(true),
            page_requested: Signal::new(),
            loading_changed: Signal::new(),
            column_widths_changed: Signal::new(),
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Replaces the configuration; it takes effect on the next reaction cycle.
    ///
    /// Switching the paging axis makes the next cycle behave like the first,
    /// so the newly paged axis starts from a fresh page-size request.
    pub fn set_config(&mut self, config: PagingConfig) {
        if config.paging_axis != self.config.paging_axis {
            tracing::debug!(target: targets::SYNC, from = ?self.config.paging_axis, to = ?config.paging_axis, "paging axis switched");
            self.sync.reset();
        }
        self.config = config;
    }

    /// Updates the runtime page-size value used in dynamic mode.
    pub fn set_dynamic_page_size(&mut self, value: Option<f64>) {
        self.config.dynamic_page_size = value;
    }

    /// The effective page size, or `None` when nothing is paged.
    pub fn page_size(&self) -> Option<usize> {
        resolve_page_size(&self.config)
    }

    /// Runs one reaction cycle: synchronizes offsets and limits, settles the
    /// loading flag, and resets column widths if the column count changed.
    pub fn react(&mut self, sources: &GridSources<'_>) {
        let _span = PerfSpan::new(span_names::REACT);
        let page_size = self.page_size();

        let outcome = self.sync.apply(&self.config, page_size, sources);
        if outcome.cells_ready {
            self.set_loading(false);
        }

        let column_count = sources.columns.len();
        if self.column_count.update(column_count) {
            self.widths.reset(column_count);
            self.column_widths_changed.emit(self.widths.as_slice().to_vec());
        }
        grid_trace!(?page_size, ?outcome, column_count, "reaction cycle done");
    }

    /// The zero-based current page, derived from the paged axis's offset.
    pub fn current_page(&self, sources: &GridSources<'_>) -> Option<usize> {
        let page_size = self.page_size()?;
        let axis = sources.paged(self.config.paging_axis)?;
        Some(navigation::current_page(axis.offset(), page_size))
    }

    /// Whether cell data for the current page is still on its way.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// The column widths in column order.
    pub fn column_widths(&self) -> &[WidthToken] {
        self.widths.as_slice()
    }

    /// Moves to the page `compute` derives from the current page.
    ///
    /// Does nothing when paging is disabled. When the cell offset moves, the
    /// loading flag is raised until the new cell page arrives.
    pub fn set_page<F>(&self, sources: &GridSources<'_>, compute: F) -> Option<NavigationOutcome>
    where
        F: FnOnce(i64) -> i64,
    {
        let _span = PerfSpan::new(span_names::NAVIGATE);
        let outcome = navigation::navigate(&self.config, self.page_size(), sources, compute)?;
        if outcome.cells_moved {
            self.set_loading(true);
        }
        self.page_requested.emit(outcome.page);
        Some(outcome)
    }

    /// Applies a [`PageTransition`].
    pub fn transition(
        &self,
        sources: &GridSources<'_>,
        transition: PageTransition,
    ) -> Option<NavigationOutcome> {
        self.set_page(sources, |current| transition.apply(current))
    }

    /// Goes to the given zero-based page.
    pub fn goto_page(&self, sources: &GridSources<'_>, page: i64) -> Option<NavigationOutcome> {
        self.transition(sources, PageTransition::Goto(page))
    }

    /// Goes one page forward.
    pub fn next_page(&self, sources: &GridSources<'_>) -> Option<NavigationOutcome> {
        self.transition(sources, PageTransition::Next)
    }

    /// Goes one page back.
    pub fn previous_page(&self, sources: &GridSources<'_>) -> Option<NavigationOutcome> {
        self.transition(sources, PageTransition::Previous)
    }

    /// Records a resized column width in pixels.
    ///
    /// Widths that are not positive and finite are ignored.
    pub fn set_column_width(&mut self, index: usize, pixels: f64) {
        if !(pixels.is_finite() && pixels > 0.0) {
            grid_warn!(index, pixels, "ignoring invalid column width");
            return;
        }
        if self.widths.set(index, pixels) {
            tracing::debug!(target: targets::LAYOUT, index, pixels, "column resized");
            self.column_widths_changed.emit(self.widths.as_slice().to_vec());
        }
    }

    /// Pagination control state, or `None` when no control is shown.
    pub fn pagination(&self, sources: &GridSources<'_>) -> Option<PaginationState> {
        if !navigation::has_pagination(self.config.paging_axis, self.config.paging_position) {
            return None;
        }
        PaginationState::for_grid(&self.config, self.page_size(), sources)
    }

    /// Column count including the row header column, if shown.
    pub fn effective_column_count(&self, sources: &GridSources<'_>) -> usize {
        sources.columns.len() + usize::from(self.config.show_row_header)
    }

    /// Whether the empty placeholder replaces the rows.
    pub fn show_empty_placeholder(&self, sources: &GridSources<'_>) -> bool {
        self.config.show_empty_placeholder && sources.rows.is_empty()
    }

    /// Resolves the class of a row through an optional lookup, defaulting to "".
    pub fn row_class<T, F>(&self, row: &T, lookup: Option<F>) -> String
    where
        F: Fn(&T) -> Option<String>,
    {
        lookup.and_then(|f| f(row)).unwrap_or_default()
    }

    /// Everything the rendering layer reads for one frame.
    pub fn view(&self, sources: &GridSources<'_>) -> GridView {
        GridView {
            current_page: self.current_page(sources),
            page_size: self.page_size(),
            loading: self.is_loading(),
            column_widths: self.widths.as_slice().to_vec(),
            grid_template: self.widths.grid_template(),
            effective_column_count: self.effective_column_count(sources),
            show_empty_placeholder: self.show_empty_placeholder(sources),
            pagination: self.pagination(sources),
        }
    }

    fn set_loading(&self, loading: bool) {
        if self.loading.set(loading) {
            tracing::debug!(target: targets::SYNC, loading, "loading changed");
            self.loading_changed.emit(loading);
        }
    }
}

impl std::fmt::Debug for GridController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridController")
            .field("config", &self.config)
            .field("loading", &self.loading.get())
            .field("widths", &self.widths)
            .finish()
    }
}
