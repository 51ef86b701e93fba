//! Column-width layout state.
//!
//! [`ColumnWidths`] holds one [`WidthToken`] per column. It has exactly two
//! transitions:
//!
//! - **Reset**: the column count changed; every entry becomes `1fr`.
//!   Explicit widths are discarded because their indices no longer line up
//!   with the new columns.
//! - **Set one**: a resize handle reported a pixel width for one column.
//!
//! The row header column, when shown, is not part of this state.
//!
//! # Example
//!
//! ```
//! use pagegrid::layout::ColumnWidths;
//!
//! let mut widths = ColumnWidths::new(3);
//! widths.set(1, 120.0);
//! assert_eq!(widths.grid_template(), "1fr 120px 1fr");
//!
//! widths.reset(2);
//! assert_eq!(widths.grid_template(), "1fr 1fr");
//! ```

use std::fmt::{self, Write as _};

use pagegrid_core::logging::targets;

/// A track size in the grid template.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WidthToken {
    /// Take an equal share of the free space (`1fr`).
    #[default]
    Flex,
    /// An explicit width in pixels (`<px>px`).
    Pixels(f64),
}

impl WidthToken {
    /// The explicit width, if any.
    pub fn pixels(self) -> Option<f64> {
        match self {
            Self::Pixels(px) => Some(px),
            Self::Flex => None,
        }
    }
}

impl fmt::Display for WidthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flex => f.write_str("1fr"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Ordered widths, one per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnWidths {
    widths: Vec<WidthToken>,
}

impl ColumnWidths {
    /// Creates `column_count` flex widths.
    pub fn new(column_count: usize) -> Self {
        Self {
            widths: vec![WidthToken::Flex; column_count],
        }
    }

    /// Replaces every width with `column_count` flex widths.
    pub fn reset(&mut self, column_count: usize) {
        tracing::debug!(target: targets::LAYOUT, old = self.widths.len(), new = column_count, "resetting column widths");
        self.widths.clear();
        self.widths.resize(column_count, WidthToken::Flex);
    }

    /// Sets the width of the column at `index` to `pixels`.
    ///
    /// Every other entry is left untouched. Resize handles are created per
    /// column, so an out-of-range index is a caller bug; it is logged and
    /// ignored. Returns `true` if the entry changed.
    pub fn set(&mut self, index: usize, pixels: f64) -> bool {
        let len = self.widths.len();
        let Some(slot) = self.widths.get_mut(index) else {
            tracing::warn!(target: targets::LAYOUT, index, len, "column width index out of range");
            return false;
        };
        let token = WidthToken::Pixels(pixels);
        if *slot == token {
            return false;
        }
        *slot = token;
        true
    }

    /// The width of the column at `index`.
    pub fn get(&self, index: usize) -> Option<WidthToken> {
        self.widths.get(index).copied()
    }

    /// All widths in column order.
    pub fn as_slice(&self) -> &[WidthToken] {
        &self.widths
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` when there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// The widths rendered as a track list, e.g. `"1fr 120px 1fr"`.
    pub fn grid_template(&self) -> String {
        let mut template = String::with_capacity(self.widths.len() * 6);
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                template.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(template, "{width}");
        }
        template
    }
}
