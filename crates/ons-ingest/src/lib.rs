//! Raw export ingestion for the ONS pipeline.
//!
//! This crate locates the raw generator exports written by the extract stage
//! and splits each export into its untyped `(period, value)` rows.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ons_ingest::{latest_raw_file, read_generator_csv};
//!
//! let raw = latest_raw_file(Path::new("data/raw"), "cpih_l55o_")?;
//! let frame = read_generator_csv(&raw.path)?;
//! ```

mod discovery;
mod error;
mod generator;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{RawFile, latest_raw_file, list_csv_files, list_raw_files};

// === Generator Exports ===
pub use generator::{
    MAX_PREAMBLE_SCAN_ROWS, is_period_row_start, parse_generator_export, parse_generator_rows,
    raw_frame, read_generator_csv,
};
