//! Extract stage of the ONS pipeline.
//!
//! Downloads the generator CSV export of each configured series into the raw
//! directory as `{series_key}_{YYYYMMDD_HHMMSS}.csv`.

mod error;
mod extract;
mod fetch;

pub use error::{ExtractError, Result};
pub use extract::{
    DownloadedFile, ExtractReport, SeriesExtract, TIMESTAMP_FORMAT, extract_series, raw_file_name,
    run_timestamp,
};
pub use fetch::{Fetcher, HttpFetcher};
