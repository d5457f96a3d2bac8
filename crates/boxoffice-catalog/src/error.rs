//! Error types for loading catalog data.

use std::path::PathBuf;

use boxoffice_view::ViewError;
use thiserror::Error;

/// Errors that can occur while loading listings or building their views.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload could not be decoded. Views are never handed a partial
    /// collection.
    #[error("failed to load {what}")]
    LoadFailed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A listing or config file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A view config file could not be parsed.
    #[error("invalid view config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
