//! Row-level types and the long-format column contract.

use chrono::NaiveDate;

use crate::series::SeriesDescriptor;

/// Raw export column holding the period label (e.g. `2010 JAN`).
pub const PERIOD_COLUMN: &str = "period";
/// Raw export column holding the untyped value text.
pub const VALUE_COLUMN: &str = "value";

pub const COL_DATE: &str = "date";
pub const COL_SERIES_ID: &str = "series_id";
pub const COL_SERIES_KEY: &str = "series_key";
pub const COL_SERIES_NAME: &str = "series_name";
pub const COL_VALUE: &str = "value";
pub const COL_UNIT: &str = "unit";
pub const COL_SOURCE: &str = "source";
pub const COL_YOY_CHANGE: &str = "yoy_change";
pub const COL_ROLLING_3M: &str = "rolling_3m";

/// Canonical column order of the long-format dataset.
pub const OUTPUT_COLUMNS: [&str; 9] = [
    COL_DATE,
    COL_SERIES_ID,
    COL_SERIES_KEY,
    COL_SERIES_NAME,
    COL_VALUE,
    COL_UNIT,
    COL_SOURCE,
    COL_YOY_CHANGE,
    COL_ROLLING_3M,
];

/// One untyped row of an agency export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPeriodValue {
    pub period: String,
    pub value: String,
}

/// One row of the long-format dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedObservation {
    /// Always the first day of a month.
    pub date: NaiveDate,
    pub series_id: String,
    pub series_key: String,
    pub series_name: String,
    pub value: f64,
    pub unit: String,
    pub source: String,
    pub yoy_change: Option<f64>,
    pub rolling_3m: Option<f64>,
}

impl StandardizedObservation {
    /// Build an observation carrying the descriptor's identity and metadata.
    ///
    /// Derived columns start out absent.
    pub fn from_descriptor(descriptor: &SeriesDescriptor, date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            series_id: descriptor.series_id.to_string(),
            series_key: descriptor.series_key.to_string(),
            series_name: descriptor.series_name.to_string(),
            value,
            unit: descriptor.unit.to_string(),
            source: descriptor.source.to_string(),
            yoy_change: None,
            rolling_3m: None,
        }
    }
}
