//! Paging configuration for a grid.
//!
//! A [`PagingConfig`] says which axis is paged, how the page size is chosen,
//! whether cells are paged alongside it, and where the pagination control
//! sits. It is read-only to the controller except for the dynamic page-size
//! value, which the host may change at any time.
//!
//! # Loading from TOML
//!
//! ```
//! use pagegrid::{PagingAxis, PageSizeMode, PagingConfig};
//!
//! let config = PagingConfig::from_toml_str(r#"
//! paging-axis = "row"
//! page-size-mode = "dynamic"
//! dynamic-page-size = 25
//! page-cells = true
//! paging-position = "both"
//! "#).unwrap();
//!
//! assert_eq!(config.paging_axis, PagingAxis::Row);
//! assert_eq!(config.page_size_mode, PageSizeMode::Dynamic);
//! assert_eq!(config.dynamic_page_size, Some(25.0));
//! ```

use std::path::Path;

use pagegrid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which collection is paged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingAxis {
    /// Rows are paged; every column is shown.
    Row,
    /// Columns are paged; every row is shown.
    Column,
    /// Nothing is paged.
    #[default]
    None,
}

impl PagingAxis {
    /// Returns `true` if either rows or columns are paged.
    pub fn is_paged(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How the page size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSizeMode {
    /// Use [`PagingConfig::fixed_page_size`].
    #[default]
    Fixed,
    /// Use the runtime value in [`PagingConfig::dynamic_page_size`].
    Dynamic,
}

/// Where the pagination control is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingPosition {
    /// Above the grid.
    Top,
    /// Below the grid.
    #[default]
    Bottom,
    /// Above and below the grid.
    Both,
    /// Not rendered.
    None,
}

impl PagingPosition {
    /// Whether a control is placed above the grid.
    pub fn is_top(self) -> bool {
        matches!(self, Self::Top | Self::Both)
    }

    /// Whether a control is placed below the grid.
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::Both)
    }
}

/// Paging and layout configuration for one grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PagingConfig {
    /// Which axis is paged.
    pub paging_axis: PagingAxis,
    /// How the page size is chosen.
    pub page_size_mode: PageSizeMode,
    /// Page size in fixed mode.
    pub fixed_page_size: usize,
    /// Runtime page size in dynamic mode. Missing or invalid values fall back to 10.
    pub dynamic_page_size: Option<f64>,
    /// Whether the cell collection is paged together with the paging axis.
    pub page_cells: bool,
    /// Where the pagination control is rendered.
    pub paging_position: PagingPosition,
    /// Whether a row header column is prepended to every row.
    pub show_row_header: bool,
    /// Whether an empty placeholder is shown when there are no rows.
    pub show_empty_placeholder: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            paging_axis: PagingAxis::None,
            page_size_mode: PageSizeMode::Fixed,
            fixed_page_size: crate::page_size::DEFAULT_PAGE_SIZE,
            dynamic_page_size: None,
            page_cells: false,
            paging_position: PagingPosition::Bottom,
            show_row_header: false,
            show_empty_placeholder: true,
        }
    }
}

impl PagingConfig {
    /// Creates a configuration that pages nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paged axis.
    pub fn with_paging_axis(mut self, axis: PagingAxis) -> Self {
        self.paging_axis = axis;
        self
    }

    /// Uses a fixed page size.
    pub fn with_fixed_page_size(mut self, page_size: usize) -> Self {
        self.page_size_mode = PageSizeMode::Fixed;
        self.fixed_page_size = page_size;
        self
    }

    /// Uses a dynamic page size, starting from `value`.
    pub fn with_dynamic_page_size(mut self, value: Option<f64>) -> Self {
        self.page_size_mode = PageSizeMode::Dynamic;
        self.dynamic_page_size = value;
        self
    }

    /// Enables or disables cell paging.
    pub fn with_page_cells(mut self, page_cells: bool) -> Self {
        self.page_cells = page_cells;
        self
    }

    /// Sets where the pagination control is rendered.
    pub fn with_paging_position(mut self, position: PagingPosition) -> Self {
        self.paging_position = position;
        self
    }

    /// Shows or hides the row header column.
    pub fn with_row_header(mut self, show: bool) -> Self {
        self.show_row_header = show;
        self
    }

    /// Shows or hides the empty placeholder.
    pub fn with_empty_placeholder(mut self, show: bool) -> Self {
        self.show_empty_placeholder = show;
        self
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), axis = ?config.paging_axis, "loaded grid configuration");
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// A zero fixed page size is rejected when it would be used. Dynamic
    /// values are never rejected; they fall back to the default instead.
    pub fn validate(&self) -> Result<()> {
        if self.paging_axis.is_paged()
            && self.page_size_mode == PageSizeMode::Fixed
            && self.fixed_page_size == 0
        {
            return Err(ConfigError::invalid_value(
                "fixed-page-size",
                "must be greater than zero when paging is enabled",
            ));
        }
        Ok(())
    }
}
