//! Error types for series standardization and merging.

use thiserror::Error;

/// Errors raised while standardizing or merging series tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The raw table does not carry the `(period, value)` columns.
    #[error("raw table is missing expected columns: expected {expected:?}, found {found:?}")]
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Month gaps were found while contiguity is enforced.
    #[error("series {series_key} has {gaps} month gap(s), first {first_gap}")]
    NonContiguous {
        series_key: String,
        gaps: usize,
        first_gap: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
