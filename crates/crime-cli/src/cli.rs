//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use crime_model::PipelineConfig;

#[derive(Parser)]
#[command(
    name = "crime-etl",
    version,
    about = "Combine London crime extracts into one clean dataset",
    long_about = "Reconcile the monthly crime dashboard workbook with the older\n\
                  borough/SNT CSV extracts: unify column names, normalize values,\n\
                  drop the overlapping period, deduplicate, and write one sorted\n\
                  CSV artifact."
)]
pub struct Cli {
    /// Directory containing the workbook and the CSV extracts.
    #[arg(value_name = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Exact filename of the authoritative workbook.
    #[arg(long = "workbook", value_name = "FILE")]
    pub workbook: Option<String>,

    /// Filename prefix matching the supplementary CSV extracts.
    #[arg(long = "extract-prefix", value_name = "PREFIX")]
    pub extract_prefix: Option<String>,

    /// Output filename (written into DATA_DIR).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// First month covered by the workbook (YYYY-MM-DD); supplementary
    /// rows on or after this date are excluded.
    #[arg(long = "authoritative-start", value_name = "DATE")]
    pub authoritative_start: Option<NaiveDate>,

    /// Last month covered by the workbook (YYYY-MM-DD); informational.
    #[arg(long = "authoritative-end", value_name = "DATE")]
    pub authoritative_end: Option<NaiveDate>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold CLI overrides into the default configuration.
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig {
            data_dir: self.data_dir.clone(),
            ..PipelineConfig::default()
        };
        if let Some(workbook) = &self.workbook {
            config.workbook_name = workbook.clone();
        }
        if let Some(prefix) = &self.extract_prefix {
            config.extract_prefix = prefix.clone();
        }
        if let Some(output) = &self.output {
            config.output_name = output.clone();
        }
        if let Some(start) = self.authoritative_start {
            config.authoritative_start = start;
        }
        if let Some(end) = self.authoritative_end {
            config.authoritative_end = end;
        }
        config
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
