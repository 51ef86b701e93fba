//! Page-size resolution.
//!
//! The effective page size is recomputed from the configuration on every
//! call. Nothing is cached because the dynamic value may change between
//! reaction cycles without notice.

use crate::config::{PageSizeMode, PagingConfig};

/// Page size used when a dynamic value is missing or unusable.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound for a dynamic page size; larger values are clamped to it.
pub const MAX_DYNAMIC_PAGE_SIZE: usize = u32::MAX as usize;

/// Resolves the effective page size, or `None` when nothing is paged.
///
/// # Example
///
/// ```
/// use pagegrid::{resolve_page_size, PagingAxis, PagingConfig};
///
/// let config = PagingConfig::new()
///     .with_paging_axis(PagingAxis::Row)
///     .with_dynamic_page_size(None);
/// assert_eq!(resolve_page_size(&config), Some(10));
///
/// let config = config.with_dynamic_page_size(Some(4.6));
/// assert_eq!(resolve_page_size(&config), Some(5));
///
/// let unpaged = PagingConfig::new();
/// assert_eq!(resolve_page_size(&unpaged), None);
/// ```
pub fn resolve_page_size(config: &PagingConfig) -> Option<usize> {
    if !config.paging_axis.is_paged() {
        return None;
    }
    Some(match config.page_size_mode {
        PageSizeMode::Dynamic => coerce_dynamic_page_size(config.dynamic_page_size),
        PageSizeMode::Fixed => config.fixed_page_size,
    })
}

/// Rounds a runtime page-size value, falling back to [`DEFAULT_PAGE_SIZE`].
///
/// Absent, NaN, infinite and non-positive (after rounding) values all fall
/// back. Finite values above [`MAX_DYNAMIC_PAGE_SIZE`] are clamped to it.
pub fn coerce_dynamic_page_size(value: Option<f64>) -> usize {
    match value.map(f64::round) {
        Some(rounded) if rounded.is_finite() && rounded >= 1.0 => {
            rounded.min(MAX_DYNAMIC_PAGE_SIZE as f64) as usize
        }
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Coerces a textual runtime value to a number.
///
/// Surrounding whitespace is ignored and empty or unparsable text counts as
/// absent.
pub fn parse_dynamic_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}
