//! CLI argument definitions for the ONS pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use ons_model::{ContiguityMode, SeriesKey};

#[derive(Parser)]
#[command(
    name = "ons-pipeline",
    version,
    about = "ONS time-series pipeline - download, standardize and warehouse macro series",
    long_about = "Download ONS generator CSV exports, turn them into one tidy long-format\n\
                  dataset with year-over-year and rolling columns, and load the result\n\
                  into an SQLite warehouse."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON pipeline configuration; flags override its values.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Only process this series (repeatable; default: all).
    #[arg(long = "series", value_name = "KEY", global = true)]
    pub series: Vec<SeriesKey>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the generator export of each series into the raw directory.
    Extract(ExtractArgs),

    /// Build the long-format dataset from the latest raw files.
    Transform(TransformArgs),

    /// Replace the warehouse tables from the processed dataset.
    Load(LoadArgs),

    /// Run extract, transform and load in sequence.
    Run(RunArgs),

    /// List the configured series.
    Series,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Directory receiving raw exports (default: data/raw).
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Request timeout in seconds (default: 60).
    #[arg(long = "timeout-secs", value_name = "N")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args)]
pub struct TransformArgs {
    /// Directory holding raw exports (default: data/raw).
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Directory for the processed dataset (default: data/processed).
    #[arg(long = "processed-dir", value_name = "DIR")]
    pub processed_dir: Option<PathBuf>,

    /// How month gaps inside a series are handled.
    #[arg(long = "check-contiguity", value_enum)]
    pub check_contiguity: Option<ContiguityArg>,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Directory holding the processed dataset (default: data/processed).
    #[arg(long = "processed-dir", value_name = "DIR")]
    pub processed_dir: Option<PathBuf>,

    /// SQLite warehouse file (default: data/warehouse.db).
    #[arg(long = "warehouse", value_name = "PATH")]
    pub warehouse: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub transform: TransformArgs,

    /// SQLite warehouse file (default: data/warehouse.db).
    #[arg(long = "warehouse", value_name = "PATH")]
    pub warehouse: Option<PathBuf>,

    /// Request timeout in seconds (default: 60).
    #[arg(long = "timeout-secs", value_name = "N")]
    pub timeout_secs: Option<u64>,
}

/// CLI contiguity choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ContiguityArg {
    Ignore,
    Warn,
    Strict,
}

impl From<ContiguityArg> for ContiguityMode {
    fn from(arg: ContiguityArg) -> Self {
        match arg {
            ContiguityArg::Ignore => ContiguityMode::Ignore,
            ContiguityArg::Warn => ContiguityMode::Warn,
            ContiguityArg::Strict => ContiguityMode::Strict,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
