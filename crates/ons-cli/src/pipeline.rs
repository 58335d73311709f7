//! Pipeline stages with explicit inputs and typed results.
//!
//! 1. **Extract**: download each series' generator export into the raw dir
//! 2. **Transform**: locate, parse, standardize, merge and write the dataset
//! 3. **Load**: replace the warehouse tables from the processed dataset
//!
//! Stages only communicate through the filesystem, so each one can run alone.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ons_extract::{ExtractReport, Fetcher, HttpFetcher, extract_series, run_timestamp};
use ons_ingest::{latest_raw_file, read_generator_csv};
use ons_load::load_dataset;
use ons_model::{PipelineConfig, SeriesKey, StandardizeOptions};
use ons_output::{dataset_path, write_dataset_csv};
use ons_transform::{SeriesFrame, merge_series, standardize_series};

use crate::types::{LoadResult, RunResult, SeriesSummary, TransformResult};

// ============================================================================
// Stage 1: Extract
// ============================================================================

/// Downloads the selected series over HTTP.
pub fn extract(raw_dir: &Path, series: &[SeriesKey], timeout_secs: u64) -> Result<ExtractReport> {
    let fetcher =
        HttpFetcher::new(Duration::from_secs(timeout_secs)).context("create HTTP client")?;
    extract_with(&fetcher, raw_dir, series)
}

/// Runs the extract stage with the given fetcher.
pub fn extract_with(
    fetcher: &dyn Fetcher,
    raw_dir: &Path,
    series: &[SeriesKey],
) -> Result<ExtractReport> {
    let span = info_span!("extract", raw_dir = %raw_dir.display());
    let _guard = span.enter();
    info!(series = series.len(), "extract started");
    extract_series(fetcher, raw_dir, series, &run_timestamp())
        .with_context(|| format!("extract into {}", raw_dir.display()))
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

fn transform_one(
    raw_dir: &Path,
    key: SeriesKey,
    options: StandardizeOptions,
) -> Result<(SeriesFrame, SeriesSummary)> {
    let descriptor = key.descriptor();
    let raw_file = latest_raw_file(raw_dir, descriptor.file_prefix)
        .with_context(|| format!("locate raw file for {key}"))?;
    info!(path = %raw_file.path.display(), "using raw file");

    let raw = read_generator_csv(&raw_file.path)
        .with_context(|| format!("parse {}", raw_file.path.display()))?;
    let frame = standardize_series(&raw, descriptor, options)
        .with_context(|| format!("standardize {key}"))?;

    let summary = SeriesSummary {
        key,
        raw_file: raw_file.path,
        input_rows: frame.stats.input_rows,
        records: frame.record_count(),
        dropped: frame.stats.dropped_rows(),
        month_gaps: frame.stats.month_gaps,
    };
    Ok((frame, summary))
}

/// Standardizes every selected series and writes the merged dataset.
///
/// Series run in order; the first failure aborts the stage.
pub fn transform(
    raw_dir: &Path,
    processed_dir: &Path,
    series: &[SeriesKey],
    options: StandardizeOptions,
) -> Result<TransformResult> {
    let span = info_span!("transform", raw_dir = %raw_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    info!("transform started");

    let mut frames = Vec::with_capacity(series.len());
    let mut summaries = Vec::with_capacity(series.len());
    for &key in series {
        let series_span = info_span!("series", series_key = key.as_str());
        let (frame, summary) = series_span.in_scope(|| transform_one(raw_dir, key, options))?;
        frames.push(frame);
        summaries.push(summary);
    }

    let mut merged = merge_series(frames).context("merge series")?;
    let output = write_dataset_csv(processed_dir, &mut merged).context("write dataset")?;
    info!(
        records = merged.height(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "transform finished"
    );
    Ok(TransformResult {
        output,
        records: merged.height(),
        series: summaries,
    })
}

// ============================================================================
// Stage 3: Load
// ============================================================================

/// Loads the processed dataset into the warehouse.
pub fn load(processed_dir: &Path, warehouse: &Path) -> Result<LoadResult> {
    let dataset = dataset_path(processed_dir);
    info!(dataset = %dataset.display(), "load started");
    let summary = load_dataset(&dataset, warehouse)
        .with_context(|| format!("load into {}", warehouse.display()))?;
    Ok(LoadResult {
        dataset,
        warehouse: warehouse.to_path_buf(),
        summary,
    })
}

/// Runs extract, transform and load in sequence.
pub fn run_all(config: &PipelineConfig) -> Result<RunResult> {
    let series = config.selected_series();
    let extract_report = extract(&config.raw_dir, &series, config.timeout_secs)?;
    let transform_result = transform(
        &config.raw_dir,
        &config.processed_dir,
        &series,
        config.standardize,
    )?;
    let load_result = load(&config.processed_dir, &config.warehouse)?;
    Ok(RunResult {
        extract: extract_report,
        transform: transform_result,
        load: load_result,
    })
}
