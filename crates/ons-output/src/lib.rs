//! Output writers for the processed dataset.

pub mod common;
pub mod csv;
pub mod error;

pub use common::ensure_parent_dir;
pub use csv::{DATASET_FILE_NAME, dataset_path, write_csv, write_dataset_csv};
pub use error::{OutputError, Result};
