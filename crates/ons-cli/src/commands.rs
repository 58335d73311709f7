use anyhow::Result;

use ons_cli::pipeline::{extract, load, run_all, transform};
use ons_cli::types::{LoadResult, RunResult, TransformResult};
use ons_extract::ExtractReport;
use ons_model::PipelineConfig;

pub fn run_extract(config: &PipelineConfig) -> Result<ExtractReport> {
    extract(
        &config.raw_dir,
        &config.selected_series(),
        config.timeout_secs,
    )
}

pub fn run_transform(config: &PipelineConfig) -> Result<TransformResult> {
    transform(
        &config.raw_dir,
        &config.processed_dir,
        &config.selected_series(),
        config.standardize,
    )
}

pub fn run_load(config: &PipelineConfig) -> Result<LoadResult> {
    load(&config.processed_dir, &config.warehouse)
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<RunResult> {
    run_all(config)
}
