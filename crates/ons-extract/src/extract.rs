//! The extract stage: one download per configured series.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info, info_span};

use ons_model::{SeriesDescriptor, SeriesKey};

use crate::error::{ExtractError, Result};
use crate::fetch::Fetcher;

/// `strftime` pattern of the timestamp embedded in raw file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp for a new extract run, in local time.
pub fn run_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Raw file name for a series download, e.g. `cpih_l55o_20240101_093000.csv`.
pub fn raw_file_name(descriptor: &SeriesDescriptor, timestamp: &str) -> String {
    format!("{}{timestamp}.csv", descriptor.file_prefix)
}

/// A saved export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of one series download.
#[derive(Debug)]
pub struct SeriesExtract {
    pub key: SeriesKey,
    pub outcome: Result<DownloadedFile>,
}

/// Per-series outcomes of one extract run.
#[derive(Debug)]
pub struct ExtractReport {
    pub timestamp: String,
    pub series: Vec<SeriesExtract>,
}

impl ExtractReport {
    pub fn succeeded(&self) -> usize {
        self.series.iter().filter(|s| s.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.series.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

fn download_one(
    fetcher: &dyn Fetcher,
    raw_dir: &Path,
    descriptor: &SeriesDescriptor,
    timestamp: &str,
) -> Result<DownloadedFile> {
    info!(url = descriptor.url, "downloading export");
    let body = fetcher.fetch(descriptor.url)?;
    let path = raw_dir.join(raw_file_name(descriptor, timestamp));
    fs::write(&path, &body).map_err(|e| ExtractError::Write {
        path: path.clone(),
        source: e,
    })?;
    info!(path = %path.display(), bytes = body.len(), "saved export");
    Ok(DownloadedFile {
        path,
        bytes: body.len(),
    })
}

/// Downloads every series in `series` into `raw_dir`.
///
/// A failed series is logged and recorded in the report; the remaining series
/// are still attempted. Only failing to create `raw_dir` aborts the run.
pub fn extract_series(
    fetcher: &dyn Fetcher,
    raw_dir: &Path,
    series: &[SeriesKey],
    timestamp: &str,
) -> Result<ExtractReport> {
    fs::create_dir_all(raw_dir).map_err(|e| ExtractError::CreateDir {
        path: raw_dir.to_path_buf(),
        source: e,
    })?;

    let mut outcomes = Vec::with_capacity(series.len());
    for &key in series {
        let descriptor = key.descriptor();
        let span = info_span!("extract_series", series_key = descriptor.series_key);
        let _guard = span.enter();
        let outcome = download_one(fetcher, raw_dir, descriptor, timestamp);
        if let Err(err) = &outcome {
            error!(
                series_id = descriptor.series_id,
                error = %err,
                "download failed"
            );
        }
        outcomes.push(SeriesExtract { key, outcome });
    }

    let report = ExtractReport {
        timestamp: timestamp.to_string(),
        series: outcomes,
    };
    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "extract finished"
    );
    Ok(report)
}
