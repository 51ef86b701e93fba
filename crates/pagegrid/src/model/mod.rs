//! Data model for the grid controller.
//!
//! This module defines the seam between the controller and the data-access
//! layer:
//!
//! - `PagedCollection`: The trait every row, column and cell source implements
//! - `Limit` / `LoadStatus`: Window length and loading status of a source
//! - `GridSources`: The three sources lent to the controller for one call
//! - `VecCollection`: An in-memory source for local data and tests
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────┐  set_offset / set_limit  ┌───────────────────┐
//! │ Controller │─────────────────────────>│  PagedCollection  │
//! │            │<─────────────────────────│ (rows/cols/cells) │
//! └────────────┘  offset, limit, status   └───────────────────┘
//!       │
//!       v
//!   GridView ──> rendering layer
//! ```

mod traits;
mod vec_collection;

pub use traits::{GridSources, Limit, LoadStatus, PagedCollection};
pub use vec_collection::VecCollection;
