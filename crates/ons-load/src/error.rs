//! Error types for the load stage.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The processed dataset has not been produced yet.
    #[error("processed dataset not found at {path}; run the transform stage first")]
    MissingDataset { path: PathBuf },

    /// The processed dataset could not be read.
    #[error("failed to read processed dataset {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Failed to create the warehouse directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SQLite operation failed.
    #[error("warehouse error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;
