//! Core systems for pagegrid.
//!
//! This crate provides the reactive building blocks the grid controller is
//! assembled from:
//!
//! - **Signal/Slot System**: Type-safe notification of state changes
//! - **Property System**: Interior-mutable values with change detection
//! - **Watched Values**: Dependency tracking for effects that must re-run
//!   only when one of their inputs changed
//! - **Logging**: Tracing targets and helpers shared by all pagegrid crates
//!
//! # Signal/Slot Example
//!
//! ```
//! use pagegrid_core::Signal;
//!
//! let page_changed = Signal::<i64>::new();
//!
//! let conn_id = page_changed.connect(|page| {
//!     println!("Page changed to: {}", page);
//! });
//!
//! page_changed.emit(3);
//! page_changed.disconnect(conn_id);
//! ```
//!
//! # Watched Example
//!
//! ```
//! use pagegrid_core::Watched;
//!
//! let mut page_size = Watched::new();
//!
//! // The first observation always counts as a change.
//! assert!(page_size.update(Some(10)));
//! assert!(!page_size.update(Some(10)));
//! assert!(page_size.update(Some(5)));
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::Error;
pub use logging::PerfSpan;
pub use property::{Property, Watched};
pub use signal::{ConnectionId, Signal};
