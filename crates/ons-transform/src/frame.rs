//! Series frame type and the long-format frame builder.

use chrono::{Datelike, NaiveDate};
use polars::prelude::{Column, DataFrame, DataType, NamedFrom, PolarsResult, Series};

use ons_model::{
    COL_DATE, COL_ROLLING_3M, COL_SERIES_ID, COL_SERIES_KEY, COL_SERIES_NAME, COL_SOURCE,
    COL_UNIT, COL_VALUE, COL_YOY_CHANGE, StandardizedObservation,
};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Row accounting for one standardized series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardizeStats {
    /// Rows in the raw table.
    pub input_rows: usize,
    /// Rows dropped because the period label did not parse.
    pub invalid_periods: usize,
    /// Rows dropped because the value was empty or not numeric.
    pub invalid_values: usize,
    /// Rows dropped as repeats of an earlier date.
    pub duplicate_dates: usize,
    /// Month gaps seen when contiguity is inspected.
    pub month_gaps: usize,
}

impl StandardizeStats {
    pub fn dropped_rows(&self) -> usize {
        self.invalid_periods + self.invalid_values + self.duplicate_dates
    }
}

/// A standardized series in long format.
#[derive(Debug, Clone)]
pub struct SeriesFrame {
    pub series_key: String,
    /// Columns in canonical output order.
    pub data: DataFrame,
    pub stats: StandardizeStats,
}

impl SeriesFrame {
    pub fn new(series_key: impl Into<String>, data: DataFrame, stats: StandardizeStats) -> Self {
        Self {
            series_key: series_key.into(),
            data,
            stats,
        }
    }

    /// Returns the number of observations in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Builds a long-format frame from observations, preserving their order.
///
/// An empty slice yields an empty frame that still carries the full schema.
pub fn observations_frame(rows: &[StandardizedObservation]) -> PolarsResult<DataFrame> {
    let dates: Vec<i32> = rows.iter().map(|row| epoch_days(row.date)).collect();
    let series_ids: Vec<&str> = rows.iter().map(|row| row.series_id.as_str()).collect();
    let series_keys: Vec<&str> = rows.iter().map(|row| row.series_key.as_str()).collect();
    let series_names: Vec<&str> = rows.iter().map(|row| row.series_name.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|row| row.value).collect();
    let units: Vec<&str> = rows.iter().map(|row| row.unit.as_str()).collect();
    let sources: Vec<&str> = rows.iter().map(|row| row.source.as_str()).collect();
    let yoy: Vec<Option<f64>> = rows.iter().map(|row| row.yoy_change).collect();
    let rolling: Vec<Option<f64>> = rows.iter().map(|row| row.rolling_3m).collect();

    let date_series = Series::new(COL_DATE.into(), dates).cast(&DataType::Date)?;
    let columns: Vec<Column> = vec![
        date_series.into(),
        Series::new(COL_SERIES_ID.into(), series_ids).into(),
        Series::new(COL_SERIES_KEY.into(), series_keys).into(),
        Series::new(COL_SERIES_NAME.into(), series_names).into(),
        Series::new(COL_VALUE.into(), values).into(),
        Series::new(COL_UNIT.into(), units).into(),
        Series::new(COL_SOURCE.into(), sources).into(),
        Series::new(COL_YOY_CHANGE.into(), yoy).into(),
        Series::new(COL_ROLLING_3M.into(), rolling).into(),
    ];
    DataFrame::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ons_common::column_strings;
    use ons_model::{OUTPUT_COLUMNS, SeriesKey};

    #[test]
    fn test_epoch_days() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(epoch_days(epoch), 0);
        let later = NaiveDate::from_ymd_opt(1970, 2, 1).unwrap();
        assert_eq!(epoch_days(later), 31);
    }

    #[test]
    fn test_empty_frame_has_schema() {
        let df = observations_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, OUTPUT_COLUMNS);
        assert_eq!(df.column(COL_DATE).unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column(COL_YOY_CHANGE).unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_dates_render_iso() {
        let date = NaiveDate::from_ymd_opt(2010, 3, 1).unwrap();
        let row = StandardizedObservation::from_descriptor(SeriesKey::AweKac3.descriptor(), date, 1.0);
        let df = observations_frame(&[row]).unwrap();
        assert_eq!(column_strings(&df, COL_DATE), Some(vec!["2010-03-01".to_string()]));
    }
}
