//! Tests for the extract stage driven by a stub fetcher.

use std::cell::RefCell;
use std::fs;

use ons_extract::{ExtractError, Fetcher, Result, extract_series};
use ons_model::SeriesKey;

/// Serves a fixed body, failing for URLs that mention `fail_on`.
struct StubFetcher {
    fail_on: Option<&'static str>,
    requested: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn new(fail_on: Option<&'static str>) -> Self {
        Self {
            fail_on,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        if self.fail_on.is_some_and(|needle| url.contains(needle)) {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status: 500,
            });
        }
        Ok(b"Title,x\n2010 JAN,1.0\n".to_vec())
    }
}

#[test]
fn writes_one_prefixed_file_per_series() {
    let dir = tempfile::tempdir().expect("temp dir");
    let raw = dir.path().join("raw");
    let fetcher = StubFetcher::new(None);

    let report =
        extract_series(&fetcher, &raw, &SeriesKey::ALL, "20240101_093000").expect("extract");

    assert_eq!(report.succeeded(), 2);
    assert!(!report.has_failures());
    assert!(raw.join("cpih_l55o_20240101_093000.csv").is_file());
    assert!(raw.join("awe_kac3_20240101_093000.csv").is_file());
    let body = fs::read_to_string(raw.join("awe_kac3_20240101_093000.csv")).expect("read");
    assert!(body.starts_with("Title"));
    assert_eq!(
        fetcher.requested.borrow().as_slice(),
        [
            SeriesKey::CpihL55o.descriptor().url,
            SeriesKey::AweKac3.descriptor().url
        ]
    );
}

#[test]
fn failing_series_does_not_stop_the_rest() {
    let dir = tempfile::tempdir().expect("temp dir");
    let fetcher = StubFetcher::new(Some("l55o"));

    let report = extract_series(&fetcher, dir.path(), &SeriesKey::ALL, "20240101_093000")
        .expect("extract");

    assert_eq!(report.failed(), 1);
    assert_eq!(report.succeeded(), 1);
    let failed = &report.series[0];
    assert_eq!(failed.key, SeriesKey::CpihL55o);
    assert!(matches!(
        failed.outcome,
        Err(ExtractError::Status { status: 500, .. })
    ));
    assert!(!dir.path().join("cpih_l55o_20240101_093000.csv").exists());
    assert!(dir.path().join("awe_kac3_20240101_093000.csv").is_file());
}
