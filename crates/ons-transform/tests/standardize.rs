//! Tests for series standardization on parsed generator exports.

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use ons_common::{column_f64s, column_strings};
use ons_ingest::parse_generator_export;
use ons_model::{OUTPUT_COLUMNS, SeriesKey, StandardizeOptions};
use ons_transform::{TransformError, standardize_series};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

fn export(start_year: i32, months: usize, value_of: impl Fn(usize) -> f64) -> String {
    let mut text = String::from("Title,CPIH\nCDID,L55O\nSource dataset ID,MM23\n");
    for idx in 0..months {
        let year = start_year + (idx / 12) as i32;
        text.push_str(&format!("{year} {},{}\n", MONTHS[idx % 12], value_of(idx)));
    }
    text
}

#[test]
fn fourteen_months_after_metadata() {
    let raw = parse_generator_export(export(2010, 14, |idx| idx as f64 + 1.0).as_bytes(), "x")
        .expect("parse export");
    let frame = standardize_series(
        &raw,
        SeriesKey::CpihL55o.descriptor(),
        StandardizeOptions::new(),
    )
    .expect("standardize");

    assert_eq!(frame.series_key, "cpih_l55o");
    assert_eq!(frame.record_count(), 14);
    let names: Vec<String> = frame
        .data
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, OUTPUT_COLUMNS);

    let dates = column_strings(&frame.data, "date").expect("date column");
    assert_eq!(dates[0], "2010-01-01");
    assert_eq!(dates[13], "2011-02-01");

    // Fourteen rows only reach back twelve positions for the last two.
    let yoy = column_f64s(&frame.data, "yoy_change").expect("yoy column");
    assert!(yoy[..12].iter().all(Option::is_none));
    assert_eq!(yoy[12], Some(1200.0));

    let rolling = column_f64s(&frame.data, "rolling_3m").expect("rolling column");
    assert_eq!(rolling[0], None);
    assert_eq!(rolling[1], None);
    assert_eq!(rolling[2], Some(2.0));
    assert!(rolling[2..].iter().all(Option::is_some));

    let ids = column_strings(&frame.data, "series_id").expect("id column");
    assert!(ids.iter().all(|id| id == "L55O"));
    let units = column_strings(&frame.data, "unit").expect("unit column");
    assert!(units.iter().all(|unit| unit == "percent"));
}

#[test]
fn every_row_has_date_and_value() {
    let mut text = export(2015, 6, |idx| idx as f64 * 0.5);
    text.push_str("2015 JUL,\n2015 AUG,..\nSource: ONS,\n");
    let raw = parse_generator_export(text.as_bytes(), "x").expect("parse export");
    let frame = standardize_series(
        &raw,
        SeriesKey::AweKac3.descriptor(),
        StandardizeOptions::new(),
    )
    .expect("standardize");

    assert_eq!(frame.record_count(), 6);
    assert_eq!(frame.stats.input_rows, 9);
    assert_eq!(frame.stats.dropped_rows(), 3);
    assert_eq!(frame.data.column("date").expect("date").null_count(), 0);
    assert_eq!(frame.data.column("value").expect("value").null_count(), 0);
}

#[test]
fn year_over_year_uses_twelve_positions_back() {
    let text = export(2000, 24, |idx| if idx < 12 { 2.0 } else { 3.0 });
    let raw = parse_generator_export(text.as_bytes(), "x").expect("parse export");
    let frame = standardize_series(
        &raw,
        SeriesKey::CpihL55o.descriptor(),
        StandardizeOptions::new(),
    )
    .expect("standardize");

    let yoy = column_f64s(&frame.data, "yoy_change").expect("yoy column");
    assert!(yoy[12..].iter().all(|change| *change == Some(50.0)));
    let first_date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("date");
    assert_eq!(
        column_strings(&frame.data, "date").expect("dates")[0],
        first_date.format("%Y-%m-%d").to_string()
    );
}

#[test]
fn wrong_columns_is_a_schema_error() {
    let raw = DataFrame::new(vec![Column::from(Series::new(
        "label".into(),
        vec!["2010 JAN"],
    ))])
    .expect("frame");
    let error = standardize_series(
        &raw,
        SeriesKey::CpihL55o.descriptor(),
        StandardizeOptions::new(),
    )
    .expect_err("missing columns");
    match error {
        TransformError::MissingColumns { expected, found } => {
            assert_eq!(expected, vec!["period", "value"]);
            assert_eq!(found, vec!["label"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
