//! Error types for the extract stage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading exports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Network request failed.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Failed to create the raw directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a downloaded export.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Returns whether the failure came from the remote side.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

/// Result type alias for extract operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
