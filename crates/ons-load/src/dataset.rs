//! Reading the processed long-format dataset.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{LoadError, Result};

/// One CSV record as written by the transform stage.
#[derive(Debug, Clone, Deserialize)]
struct DatasetRecord {
    date: String,
    #[serde(default)]
    series_id: String,
    #[serde(default)]
    series_key: String,
    #[serde(default)]
    series_name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    value: Option<f64>,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    source: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    yoy_change: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rolling_3m: Option<f64>,
}

/// A processed dataset row with a typed date.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub date: NaiveDate,
    pub series_id: String,
    pub series_key: String,
    pub series_name: String,
    pub value: Option<f64>,
    pub unit: String,
    pub source: String,
    pub yoy_change: Option<f64>,
    pub rolling_3m: Option<f64>,
}

impl DatasetRecord {
    fn into_row(self) -> Option<DatasetRow> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let series_key = self.series_key.trim().to_string();
        if series_key.is_empty() {
            return None;
        }
        Some(DatasetRow {
            date,
            series_id: self.series_id,
            series_key,
            series_name: self.series_name,
            value: self.value,
            unit: self.unit,
            source: self.source,
            yoy_change: self.yoy_change,
            rolling_3m: self.rolling_3m,
        })
    }
}

/// Reads dataset rows, dropping rows without a valid date or series key.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetRow>> {
    if !path.is_file() {
        return Err(LoadError::MissingDataset {
            path: path.to_path_buf(),
        });
    }
    let read_error = |message: String| LoadError::Read {
        path: path.to_path_buf(),
        message,
    };
    let file = File::open(path).map_err(|e| read_error(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in reader.deserialize::<DatasetRecord>() {
        let record = record.map_err(|e| read_error(e.to_string()))?;
        match record.into_row() {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, "skipped dataset rows without a valid date or series key");
    }
    debug!(path = %path.display(), rows = rows.len(), "read processed dataset");
    Ok(rows)
}
