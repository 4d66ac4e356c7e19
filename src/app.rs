//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the run configuration
//! - runs the conversion pipeline with a logging observer
//! - reports the run summary

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, DEFAULT_OUTFILE};
use crate::domain::{ConvertConfig, ExtractOptions, OutputSchema};
use crate::error::AppError;
use crate::extract::TracingObserver;
use crate::io::SourceOptions;

pub mod pipeline;

/// Entry point for the `items` binary.
pub fn run() -> Result<(), AppError> {
    run_from(std::env::args_os())
}

/// Like [`run`], with an explicit argument list.
pub fn run_from<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let config = convert_config_from_args(&cli);

    let run = pipeline::run_conversion(&config, &mut TracingObserver)?;

    for line in crate::report::format_run_summary(&run.extraction, &run.output_path).lines() {
        info!("{line}");
    }

    Ok(())
}

pub fn convert_config_from_args(cli: &Cli) -> ConvertConfig {
    ConvertConfig {
        input_path: cli.infile.clone(),
        output_path: PathBuf::from(DEFAULT_OUTFILE),
        source: SourceOptions::default(),
        extract: ExtractOptions::default(),
        schema: OutputSchema::default(),
    }
}
