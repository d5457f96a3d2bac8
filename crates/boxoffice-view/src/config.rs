//! View configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::ordering::SortSpec;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Static configuration of a [`ListView`](crate::ListView).
///
/// Deserializes from partial documents; missing keys take their defaults.
///
/// ```
/// use boxoffice_view::{Dir, ViewConfig};
///
/// let config: ViewConfig = serde_json::from_str(
///     r#"{ "search_fields": ["name", "location"], "default_sort": { "field": "name" } }"#,
/// ).unwrap();
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.default_sort.unwrap().dir, Dir::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Number of records in one window.
    pub page_size: usize,
    /// String fields the free-text search looks at.
    pub search_fields: Vec<String>,
    /// Sort applied on creation and restored by `reload`.
    pub default_sort: Option<SortSpec>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            page_size: DEFAULT_PAGE_SIZE,
            search_fields: Vec::new(),
            default_sort: None,
        }
    }
}

impl ViewConfig {
    /// Default configuration; chain the `with_*` methods to adjust it.
    pub fn new() -> Self {
        ViewConfig::default()
    }

    /// Sets the window size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Adds a field to the free-text search.
    pub fn with_search_field(mut self, field: impl Into<String>) -> Self {
        self.search_fields.push(field.into());
        self
    }

    /// Sets the sort applied on creation and on reload.
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ViewError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}
