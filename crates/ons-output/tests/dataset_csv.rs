//! Tests for the processed dataset writer.

use std::fs;

use chrono::NaiveDate;
use ons_model::{SeriesKey, StandardizedObservation};
use ons_output::{DATASET_FILE_NAME, write_dataset_csv};
use ons_transform::observations_frame;

fn sample_rows() -> Vec<StandardizedObservation> {
    let descriptor = SeriesKey::CpihL55o.descriptor();
    let mut first = StandardizedObservation::from_descriptor(
        descriptor,
        NaiveDate::from_ymd_opt(2010, 1, 1).expect("date"),
        3.5,
    );
    first.rolling_3m = None;
    let mut second = StandardizedObservation::from_descriptor(
        descriptor,
        NaiveDate::from_ymd_opt(2010, 2, 1).expect("date"),
        -0.25,
    );
    second.yoy_change = Some(12.5);
    vec![first, second]
}

#[test]
fn header_matches_column_contract() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut df = observations_frame(&sample_rows()).expect("frame");
    let path = write_dataset_csv(dir.path(), &mut df).expect("write");

    let text = fs::read_to_string(&path).expect("read back");
    let header = text.lines().next().expect("header line");
    insta::assert_snapshot!(
        header,
        @"date,series_id,series_key,series_name,value,unit,source,yoy_change,rolling_3m"
    );
}

#[test]
fn rows_use_iso_dates_and_empty_nulls() {
    let dir = tempfile::tempdir().expect("temp dir");
    let processed = dir.path().join("nested").join("processed");
    let mut df = observations_frame(&sample_rows()).expect("frame");
    let path = write_dataset_csv(&processed, &mut df).expect("write");

    assert_eq!(path, processed.join(DATASET_FILE_NAME));
    let text = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2010-01-01,L55O,cpih_l55o,"));
    assert!(lines[1].ends_with(",percent,ONS,,"));
    assert!(lines[2].starts_with("2010-02-01,"));
    assert!(lines[2].contains(",-0.25,"));
    assert!(lines[2].ends_with(",12.5,"));
}

#[test]
fn rewriting_replaces_previous_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut df = observations_frame(&sample_rows()).expect("frame");
    write_dataset_csv(dir.path(), &mut df).expect("first write");

    let mut empty = observations_frame(&[]).expect("empty frame");
    let path = write_dataset_csv(dir.path(), &mut empty).expect("second write");
    let text = fs::read_to_string(path).expect("read back");
    assert_eq!(text.lines().count(), 1);
}
