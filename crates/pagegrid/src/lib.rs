//! Pagegrid - pagination and layout control for data grids.
//!
//! A grid here is three independently paged collections: rows, columns, and
//! the row×column cells. This crate decides which window of each collection
//! must be requested, keeps the windows in step as the page size and the
//! current page change, derives the loading flag, and tracks per-column
//! widths. Rendering is left to the host, which reads a [`GridView`] after
//! every reaction cycle.
//!
//! # Example
//!
//! ```
//! use pagegrid::{resolve_page_size, PageSizeMode, PagingAxis, PagingConfig};
//!
//! let config = PagingConfig::new()
//!     .with_paging_axis(PagingAxis::Row)
//!     .with_dynamic_page_size(Some(7.6));
//! assert_eq!(config.page_size_mode, PageSizeMode::Dynamic);
//! assert_eq!(resolve_page_size(&config), Some(8));
//!
//! let unpaged = PagingConfig::new();
//! assert_eq!(resolve_page_size(&unpaged), None);
//! ```
//!
//! See [`GridController`] for driving a grid end to end.

pub mod config;
pub mod controller;
mod error;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod page_size;
pub mod sync;

pub use config::{PageSizeMode, PagingAxis, PagingConfig, PagingPosition};
pub use controller::{GridController, GridView};
pub use error::{ConfigError, Result};
pub use layout::{ColumnWidths, WidthToken};
pub use navigation::{NavigationOutcome, PageTransition, PaginationState};
pub use page_size::{resolve_page_size, DEFAULT_PAGE_SIZE, MAX_DYNAMIC_PAGE_SIZE};
pub use sync::{SyncOutcome, Synchronizer};

pub use pagegrid_core::{Property, Signal, Watched};
