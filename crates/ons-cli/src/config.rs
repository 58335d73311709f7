//! Pipeline configuration: optional JSON file plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ons_model::{ContiguityMode, PipelineConfig, SeriesKey};

/// Values given on the command line. `None` and empty keep the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub raw_dir: Option<PathBuf>,
    pub processed_dir: Option<PathBuf>,
    pub warehouse: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub series: Vec<SeriesKey>,
    pub contiguity: Option<ContiguityMode>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(dir) = &self.raw_dir {
            config.raw_dir = dir.clone();
        }
        if let Some(dir) = &self.processed_dir {
            config.processed_dir = dir.clone();
        }
        if let Some(path) = &self.warehouse {
            config.warehouse = path.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if !self.series.is_empty() {
            config.series = self.series.clone();
        }
        if let Some(mode) = self.contiguity {
            config.standardize = config.standardize.with_contiguity(mode);
        }
    }
}

/// Reads a JSON configuration file.
pub fn read_config_file(path: &Path) -> Result<PipelineConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Builds the effective configuration: defaults, then the file, then flags.
pub fn resolve_config(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<PipelineConfig> {
    let mut config = match file {
        Some(path) => read_config_file(path)?,
        None => PipelineConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}
