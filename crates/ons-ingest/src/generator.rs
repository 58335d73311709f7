//! Parsing of ONS "generator" CSV exports.
//!
//! A generator export for a single time series starts with a metadata
//! preamble and only then lists observations, with annual and quarterly
//! sections ahead of the monthly one:
//!
//! ```text
//! Title,CPIH ANNUAL RATE 00: ALL ITEMS 2015=100
//! CDID,L55O
//! Source dataset ID,MM23
//! ...
//! 1989,...
//! 1989 Q1,...
//! 2010 JAN,3.1
//! 2010 FEB,3.0
//! ```
//!
//! The file is read as an untyped grid. The first row whose first cell looks
//! like a monthly period label marks the start of data; everything from there
//! to the end of the file becomes a two-column `(period, value)` table.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use ons_model::{PERIOD_COLUMN, RawPeriodValue, VALUE_COLUMN};

use crate::error::{IngestError, Result};

/// Upper bound on rows inspected while looking for the first period row.
pub const MAX_PREAMBLE_SCAN_ROWS: usize = 200;

/// Minimum length of a monthly period label such as `2010 JAN`.
const MIN_PERIOD_LABEL_LEN: usize = 8;

/// Returns true when `text` looks like the first cell of a monthly data row.
///
/// The text is trimmed, must be at least eight characters long, and its first
/// four characters must be decimal digits. Annual (`2010`) and quarterly
/// (`2010 Q1`) labels are too short to qualify.
///
/// # Examples
///
/// ```
/// use ons_ingest::is_period_row_start;
///
/// assert!(is_period_row_start("2010 JAN"));
/// assert!(!is_period_row_start("2010 Q1"));
/// assert!(!is_period_row_start("Title"));
/// ```
pub fn is_period_row_start(text: &str) -> bool {
    let trimmed = normalize_cell(text);
    if trimmed.chars().count() < MIN_PERIOD_LABEL_LEN {
        return false;
    }
    trimmed.chars().take(4).all(|ch| ch.is_ascii_digit())
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Reads every non-blank row of an untyped CSV grid.
fn read_grid(data: &[u8], origin: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record
            .iter()
            .map(|cell| normalize_cell(cell).to_string())
            .collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Finds the index of the first data row within the scan bound.
fn find_data_start(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .take(MAX_PREAMBLE_SCAN_ROWS)
        .position(|row| row.first().is_some_and(|cell| is_period_row_start(cell)))
}

/// Splits a generator export into its `(period, value)` rows.
///
/// `origin` names the export in error messages (usually the file name).
pub fn parse_generator_rows(data: &[u8], origin: &str) -> Result<Vec<RawPeriodValue>> {
    let rows = read_grid(data, origin)?;
    let start = find_data_start(&rows).ok_or_else(|| IngestError::NoDataStart {
        origin: origin.to_string(),
        scanned: rows.len().min(MAX_PREAMBLE_SCAN_ROWS),
    })?;
    debug!(
        origin,
        preamble_rows = start,
        data_rows = rows.len() - start,
        "located start of time series rows"
    );

    let parsed = rows[start..]
        .iter()
        .map(|row| RawPeriodValue {
            period: row.first().cloned().unwrap_or_default(),
            value: row.get(1).cloned().unwrap_or_default(),
        })
        .collect();
    Ok(parsed)
}

/// Builds the two-column string frame consumed by the standardizer.
pub fn raw_frame(rows: &[RawPeriodValue]) -> Result<DataFrame> {
    let periods: Vec<&str> = rows.iter().map(|row| row.period.as_str()).collect();
    let values: Vec<&str> = rows.iter().map(|row| row.value.as_str()).collect();
    let columns: Vec<Column> = vec![
        Series::new(PERIOD_COLUMN.into(), periods).into(),
        Series::new(VALUE_COLUMN.into(), values).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Parses generator export bytes into a `(period, value)` frame.
pub fn parse_generator_export(data: &[u8], origin: &str) -> Result<DataFrame> {
    let rows = parse_generator_rows(data, origin)?;
    raw_frame(&rows)
}

/// Reads and parses a generator export from disk.
pub fn read_generator_csv(path: &Path) -> Result<DataFrame> {
    let data = fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let origin = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string);
    parse_generator_export(&data, &origin)
}
