//! ONS series pipeline CLI.

use clap::{ColorChoice, Parser};
use ons_cli::config::{ConfigOverrides, resolve_config};
use ons_cli::logging::{LogConfig, LogFormat, build_dispatch};
use ons_model::PipelineConfig;
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_extract, run_load, run_pipeline, run_transform};
use crate::summary::{
    print_extract_summary, print_load_summary, print_run_summary, print_series_catalog,
    print_transform_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let config = match resolve_config(cli.config.as_deref(), &overrides_from_cli(&cli)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let log_config = log_config_from_cli(&cli, &config);
    let dispatch = match build_dispatch(&log_config) {
        Ok(dispatch) => dispatch,
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    };

    let exit_code = tracing::dispatcher::with_default(&dispatch, || run(&cli.command, &config));
    std::process::exit(exit_code);
}

fn run(command: &Command, config: &PipelineConfig) -> i32 {
    let outcome = match command {
        Command::Extract(_) => run_extract(config).map(|report| print_extract_summary(&report)),
        Command::Transform(_) => {
            run_transform(config).map(|result| print_transform_summary(&result))
        }
        Command::Load(_) => run_load(config).map(|result| print_load_summary(&result)),
        Command::Run(_) => run_pipeline(config).map(|result| print_run_summary(&result)),
        Command::Series => {
            print_series_catalog();
            Ok(())
        }
    };
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            error!(error = format!("{err:#}"), "pipeline failed");
            eprintln!("error: {err:#}");
            1
        }
    }
}

/// Collect configuration overrides from global and subcommand flags.
fn overrides_from_cli(cli: &Cli) -> ConfigOverrides {
    let mut overrides = ConfigOverrides {
        log_file: cli.log_file.clone(),
        series: cli.series.clone(),
        ..ConfigOverrides::default()
    };
    match &cli.command {
        Command::Extract(args) => {
            overrides.raw_dir = args.raw_dir.clone();
            overrides.timeout_secs = args.timeout_secs;
        }
        Command::Transform(args) => {
            overrides.raw_dir = args.raw_dir.clone();
            overrides.processed_dir = args.processed_dir.clone();
            overrides.contiguity = args.check_contiguity.map(Into::into);
        }
        Command::Load(args) => {
            overrides.processed_dir = args.processed_dir.clone();
            overrides.warehouse = args.warehouse.clone();
        }
        Command::Run(args) => {
            overrides.raw_dir = args.transform.raw_dir.clone();
            overrides.processed_dir = args.transform.processed_dir.clone();
            overrides.contiguity = args.transform.check_contiguity.map(Into::into);
            overrides.warehouse = args.warehouse.clone();
            overrides.timeout_secs = args.timeout_secs;
        }
        Command::Series => {}
    }
    overrides
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli, config: &PipelineConfig) -> LogConfig {
    let mut log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    log_config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        log_config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    log_config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    log_config.log_file = config.log_file.clone();
    log_config.with_timestamps = log_config.log_file.is_some();
    log_config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => log_config.log_file.is_none() && io::stderr().is_terminal(),
    };
    log_config
}
