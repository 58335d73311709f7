//! Configuration options for a pipeline run.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::series::SeriesKey;

/// How month gaps inside a series are treated before window math runs.
///
/// YoY and rolling columns are position based, so a missing month silently
/// shifts which observations are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContiguityMode {
    /// Do not inspect gaps.
    #[default]
    Ignore,
    /// Log each gap and continue.
    Warn,
    /// Fail the series when a gap is found.
    Strict,
}

impl ContiguityMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ContiguityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContiguityMode {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            other => Err(ModelError::UnknownContiguityMode(other.to_string())),
        }
    }
}

/// Options controlling series standardization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeOptions {
    #[serde(default)]
    pub contiguity: ContiguityMode,
}

impl StandardizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_contiguity(mut self, mode: ContiguityMode) -> Self {
        self.contiguity = mode;
        self
    }
}

/// Default request timeout for generator downloads.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// File-backed pipeline configuration.
///
/// Every field has a default, so an empty JSON object is a valid file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub warehouse: PathBuf,
    pub log_file: Option<PathBuf>,
    pub timeout_secs: u64,
    /// Subset of series to process; empty means the whole catalog.
    pub series: Vec<SeriesKey>,
    pub standardize: StandardizeOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            processed_dir: PathBuf::from("data/processed"),
            warehouse: PathBuf::from("data/warehouse.db"),
            log_file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            series: Vec::new(),
            standardize: StandardizeOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Series to process, in catalog order.
    pub fn selected_series(&self) -> Vec<SeriesKey> {
        crate::series::resolve_selection(&self.series)
    }
}
