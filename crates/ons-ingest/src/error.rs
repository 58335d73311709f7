//! Error types for raw export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or parsing raw exports.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No raw file matches the series prefix.
    #[error("no raw files found in {dir} for prefix '{prefix}'")]
    NoRawFile { dir: PathBuf, prefix: String },

    // === CSV Parsing Errors ===
    /// Failed to tokenize the export.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// No period-shaped row was found in the scanned preamble.
    #[error("could not locate start of time series rows in {origin} (scanned {scanned} rows)")]
    NoDataStart { origin: String, scanned: usize },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
