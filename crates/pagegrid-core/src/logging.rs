//! Logging facilities for pagegrid.
//!
//! pagegrid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("pagegrid=debug")
//!         .init();
//! }
//! ```
//!
//! Synchronization steps log what they apply at `debug`, signal emission
//! logs at `trace`, and caller contract violations (an out-of-range resize
//! index, navigating with paging disabled) log at `warn` or `debug`.

/// Span names used throughout pagegrid for tracing.
pub mod span_names {
    /// One controller reaction cycle.
    pub const REACT: &str = "pagegrid::react";
    /// A navigation request.
    pub const NAVIGATE: &str = "pagegrid::navigate";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "pagegrid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pagegrid_core::signal";
    /// Offset/limit synchronization target.
    pub const SYNC: &str = "pagegrid::sync";
    /// Page navigation target.
    pub const NAVIGATION: &str = "pagegrid::navigation";
    /// Column width layout target.
    pub const LAYOUT: &str = "pagegrid::layout";
    /// Paged collection target.
    pub const COLLECTION: &str = "pagegrid::collection";
    /// Configuration loading target.
    pub const CONFIG: &str = "pagegrid::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time a reaction cycle or a navigation request.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new span for `operation`; it stays active until the guard is dropped.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "pagegrid::perf", "perf", operation);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with a consistent target.
#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "pagegrid", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "pagegrid", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "pagegrid", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new(span_names::REACT);
            grid_debug!(page = 1, "inside span");
        });
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SYNC, targets::NAVIGATION, targets::LAYOUT, targets::COLLECTION] {
            assert!(target.starts_with("pagegrid::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
