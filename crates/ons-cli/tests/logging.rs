//! Tests for the scoped logging dispatcher.

use std::fs;

use ons_cli::logging::{LogConfig, LogFormat, build_dispatch};
use tracing::level_filters::LevelFilter;

#[test]
fn log_file_is_created_with_parent_directory() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("logs").join("pipeline.log");
    let mut config = LogConfig::default()
        .with_level(LevelFilter::INFO)
        .with_format(LogFormat::Compact)
        .with_ansi(false)
        .with_timestamps(true)
        .with_log_file(Some(path.clone()));
    config.use_env_filter = false;

    let dispatch = build_dispatch(&config).expect("dispatch");
    tracing::dispatcher::with_default(&dispatch, || {
        tracing::warn!(series_key = "cpih_l55o", "scoped warning");
    });
    drop(dispatch);

    let text = fs::read_to_string(&path).expect("log file");
    assert!(text.contains("scoped warning"), "{text}");
    assert!(text.contains("cpih_l55o"), "{text}");
}

#[test]
fn json_lines_carry_the_message() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("pipeline.jsonl");
    let mut config = LogConfig::default()
        .with_format(LogFormat::Json)
        .with_log_file(Some(path.clone()));
    config.use_env_filter = false;

    let dispatch = build_dispatch(&config).expect("dispatch");
    tracing::dispatcher::with_default(&dispatch, || {
        tracing::error!("stage failed");
    });

    let text = fs::read_to_string(&path).expect("log file");
    let line = text.lines().next().expect("one line");
    let value: serde_json::Value = serde_json::from_str(line).expect("json line");
    assert_eq!(value["fields"]["message"], "stage failed");
    assert_eq!(value["level"], "ERROR");
}

#[test]
fn events_outside_the_scope_are_not_captured() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("pipeline.log");
    let mut config = LogConfig::default()
        .with_ansi(false)
        .with_log_file(Some(path.clone()));
    config.use_env_filter = false;

    let dispatch = build_dispatch(&config).expect("dispatch");
    tracing::warn!("before scope");
    tracing::dispatcher::with_default(&dispatch, || tracing::warn!("inside scope"));

    let text = fs::read_to_string(&path).expect("log file");
    assert!(text.contains("inside scope"));
    assert!(!text.contains("before scope"));
}
