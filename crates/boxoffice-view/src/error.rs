//! Error types for the view crate.

use thiserror::Error;

/// Errors raised while configuring a view or building filter values.
///
/// The data operations themselves (filtering, sorting, windowing) are total
/// and never fail.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A window must show at least one record.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    /// A date query that is neither `YYYY-MM-DD` nor an ISO datetime.
    #[error("invalid date '{input}'")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
