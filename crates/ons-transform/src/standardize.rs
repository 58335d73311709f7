//! Series standardization.
//!
//! Turns a raw `(period, value)` table into canonical long-format rows for one
//! series: typed dates and values, descriptor metadata, and derived columns.

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use ons_common::{column_strings, parse_f64};
use ons_model::{
    ContiguityMode, PERIOD_COLUMN, SeriesDescriptor, StandardizeOptions, StandardizedObservation,
    VALUE_COLUMN,
};

use crate::contiguity::find_month_gaps;
use crate::derive::{ROLLING_WINDOW, rolling_means, yoy_changes};
use crate::error::{Result, TransformError};
use crate::frame::{SeriesFrame, StandardizeStats, observations_frame};
use crate::period::parse_period;

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn missing_columns(df: &DataFrame) -> TransformError {
    TransformError::MissingColumns {
        expected: vec![PERIOD_COLUMN.to_string(), VALUE_COLUMN.to_string()],
        found: column_names(df),
    }
}

/// Standardizes one series' raw table into long format.
///
/// Rows with an unparseable period or value are dropped and counted. The
/// remaining rows are sorted by date; when a date repeats, the first row in
/// file order is kept.
pub fn standardize_series(
    raw: &DataFrame,
    descriptor: &SeriesDescriptor,
    options: StandardizeOptions,
) -> Result<SeriesFrame> {
    let periods = column_strings(raw, PERIOD_COLUMN).ok_or_else(|| missing_columns(raw))?;
    let values = column_strings(raw, VALUE_COLUMN).ok_or_else(|| missing_columns(raw))?;
    let (rows, stats) = standardize_rows(&periods, &values, descriptor, options)?;
    let data = observations_frame(&rows)?;
    Ok(SeriesFrame::new(descriptor.series_key, data, stats))
}

/// Standardizes parallel period and value columns into observations.
pub fn standardize_rows(
    periods: &[String],
    values: &[String],
    descriptor: &SeriesDescriptor,
    options: StandardizeOptions,
) -> Result<(Vec<StandardizedObservation>, StandardizeStats)> {
    let mut stats = StandardizeStats {
        input_rows: periods.len(),
        ..StandardizeStats::default()
    };

    let mut parsed: Vec<(NaiveDate, f64)> = Vec::with_capacity(periods.len());
    for (period, value) in periods.iter().zip(values) {
        let Some(date) = parse_period(period) else {
            stats.invalid_periods += 1;
            continue;
        };
        let Some(number) = parse_f64(value) else {
            stats.invalid_values += 1;
            continue;
        };
        parsed.push((date, number));
    }

    // Stable, so the first row in file order survives the dedup below.
    parsed.sort_by_key(|(date, _)| *date);
    let before_dedup = parsed.len();
    parsed.dedup_by_key(|(date, _)| *date);
    stats.duplicate_dates = before_dedup - parsed.len();

    if stats.invalid_periods + stats.invalid_values > 0 {
        debug!(
            series_key = descriptor.series_key,
            invalid_periods = stats.invalid_periods,
            invalid_values = stats.invalid_values,
            "dropped rows that did not parse"
        );
    }
    if stats.duplicate_dates > 0 {
        warn!(
            series_key = descriptor.series_key,
            duplicates = stats.duplicate_dates,
            "collapsed repeated dates, keeping first occurrence"
        );
    }

    let dates: Vec<NaiveDate> = parsed.iter().map(|(date, _)| *date).collect();
    check_contiguity(descriptor, &dates, options.contiguity, &mut stats)?;

    let numbers: Vec<f64> = parsed.iter().map(|(_, value)| *value).collect();
    let yoy = yoy_changes(&numbers);
    let rolling = rolling_means(&numbers, ROLLING_WINDOW);

    let rows: Vec<StandardizedObservation> = parsed
        .iter()
        .zip(yoy)
        .zip(rolling)
        .map(|(((date, value), yoy_change), rolling_3m)| {
            let mut row = StandardizedObservation::from_descriptor(descriptor, *date, *value);
            row.yoy_change = yoy_change;
            row.rolling_3m = rolling_3m;
            row
        })
        .collect();

    info!(
        series_key = descriptor.series_key,
        input_rows = stats.input_rows,
        output_rows = rows.len(),
        dropped = stats.dropped_rows(),
        "standardized series"
    );
    Ok((rows, stats))
}

fn check_contiguity(
    descriptor: &SeriesDescriptor,
    dates: &[NaiveDate],
    mode: ContiguityMode,
    stats: &mut StandardizeStats,
) -> Result<()> {
    if mode == ContiguityMode::Ignore {
        return Ok(());
    }
    let gaps = find_month_gaps(dates);
    stats.month_gaps = gaps.len();
    let Some(first) = gaps.first() else {
        return Ok(());
    };
    match mode {
        ContiguityMode::Strict => Err(TransformError::NonContiguous {
            series_key: descriptor.series_key.to_string(),
            gaps: gaps.len(),
            first_gap: first.to_string(),
        }),
        _ => {
            for gap in &gaps {
                warn!(series_key = descriptor.series_key, %gap, "month gap in series");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ons_model::SeriesKey;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn test_drops_bad_rows_and_counts_them() {
        let periods = strings(&["2010 JAN", "2010 Q1", "2010 FEB", "2010 MAR", "note"]);
        let values = strings(&["1.0", "9.9", "", "x", "1"]);
        let (rows, stats) = standardize_rows(
            &periods,
            &values,
            SeriesKey::CpihL55o.descriptor(),
            StandardizeOptions::new(),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(stats.invalid_periods, 2);
        assert_eq!(stats.invalid_values, 2);
        assert_eq!(stats.dropped_rows(), 4);
    }

    #[test]
    fn test_sorts_and_keeps_first_duplicate() {
        let periods = strings(&["2010 MAR", "2010 JAN", "2010 MAR", "2010 FEB"]);
        let values = strings(&["3.0", "1.0", "30.0", "2.0"]);
        let (rows, stats) = standardize_rows(
            &periods,
            &values,
            SeriesKey::AweKac3.descriptor(),
            StandardizeOptions::new(),
        )
        .unwrap();
        let kept: Vec<f64> = rows.iter().map(|row| row.value).collect();
        assert_eq!(kept, vec![1.0, 2.0, 3.0]);
        assert_eq!(stats.duplicate_dates, 1);
        assert_eq!(rows[2].rolling_3m, Some(2.0));
    }

    #[test]
    fn test_contiguity_modes() {
        let periods = strings(&["2010 JAN", "2010 APR"]);
        let values = strings(&["1.0", "2.0"]);
        let descriptor = SeriesKey::CpihL55o.descriptor();

        let (_, ignored) =
            standardize_rows(&periods, &values, descriptor, StandardizeOptions::new()).unwrap();
        assert_eq!(ignored.month_gaps, 0);

        let warn_opts = StandardizeOptions::new().with_contiguity(ContiguityMode::Warn);
        let (rows, warned) = standardize_rows(&periods, &values, descriptor, warn_opts).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(warned.month_gaps, 1);

        let strict = StandardizeOptions::new().with_contiguity(ContiguityMode::Strict);
        let error = standardize_rows(&periods, &values, descriptor, strict).unwrap_err();
        assert!(matches!(
            error,
            TransformError::NonContiguous { gaps: 1, ref series_key, .. } if series_key == "cpih_l55o"
        ));
    }
}
