//! CSV output of the long-format dataset.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// File name of the processed dataset inside the processed directory.
pub const DATASET_FILE_NAME: &str = "ons_series_long.csv";

/// Location of the processed dataset for a processed directory.
pub fn dataset_path(processed_dir: &Path) -> PathBuf {
    processed_dir.join(DATASET_FILE_NAME)
}

/// Writes a frame as comma-separated UTF-8 with a header row.
///
/// Dates are written as `YYYY-MM-DD` and nulls as empty fields. Existing
/// content at `path` is replaced.
pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|e| OutputError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Writes the merged dataset to `<processed_dir>/ons_series_long.csv`.
pub fn write_dataset_csv(processed_dir: &Path, df: &mut DataFrame) -> Result<PathBuf> {
    let path = dataset_path(processed_dir);
    write_csv(&path, df)?;
    info!(path = %path.display(), rows = df.height(), "wrote processed dataset");
    Ok(path)
}
