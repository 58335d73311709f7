//! Tests for raw file location.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use ons_ingest::{IngestError, latest_raw_file};

fn write_with_mtime(dir: &Path, name: &str, age_secs: u64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "Title,x\n").expect("write file");
    let file = File::options().write(true).open(&path).expect("open file");
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
        .expect("set mtime");
    path
}

#[test]
fn picks_most_recently_modified_match() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Name order and mtime order disagree on purpose.
    let _ = write_with_mtime(dir.path(), "cpih_l55o_20240301_000000.csv", 3_000);
    let newest = write_with_mtime(dir.path(), "cpih_l55o_20240101_000000.csv", 10);
    let _ = write_with_mtime(dir.path(), "cpih_l55o_20240201_000000.csv", 2_000);
    let _ = write_with_mtime(dir.path(), "awe_kac3_20250101_000000.csv", 0);

    let latest = latest_raw_file(dir.path(), "cpih_l55o_").expect("latest file");
    assert_eq!(latest.path, newest);
}

#[test]
fn equal_mtimes_resolve_to_greatest_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stamp = SystemTime::now() - Duration::from_secs(60);
    for name in ["awe_kac3_20240101_000000.csv", "awe_kac3_20240102_000000.csv"] {
        let path = dir.path().join(name);
        fs::write(&path, "Title,x\n").expect("write file");
        let file = File::options().write(true).open(&path).expect("open file");
        file.set_modified(stamp).expect("set mtime");
    }

    let latest = latest_raw_file(dir.path(), "awe_kac3_").expect("latest file");
    assert_eq!(latest.file_name(), "awe_kac3_20240102_000000.csv");
}

#[test]
fn zero_matches_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _ = write_with_mtime(dir.path(), "awe_kac3_20240101_000000.csv", 0);

    let error = latest_raw_file(dir.path(), "cpih_l55o_").expect_err("no match");
    assert!(matches!(error, IngestError::NoRawFile { ref prefix, .. } if prefix == "cpih_l55o_"));
}
