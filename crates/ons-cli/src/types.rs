use std::path::PathBuf;

use ons_extract::ExtractReport;
use ons_load::LoadSummary;
use ons_model::SeriesKey;

/// Per-series outcome of the transform stage.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub key: SeriesKey,
    pub raw_file: PathBuf,
    pub input_rows: usize,
    pub records: usize,
    pub dropped: usize,
    pub month_gaps: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub output: PathBuf,
    pub records: usize,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone)]
pub struct LoadResult {
    pub dataset: PathBuf,
    pub warehouse: PathBuf,
    pub summary: LoadSummary,
}

#[derive(Debug)]
pub struct RunResult {
    pub extract: ExtractReport,
    pub transform: TransformResult,
    pub load: LoadResult,
}
