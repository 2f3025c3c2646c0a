//! CLI argument definitions for the crosstable binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crosstable",
    version,
    about = "Chess tournament standings reports",
    long_about = "Load chess tournament result tables (CSV), print ranked standings,\n\
                  per-event statistics and cross-event totals, and export the\n\
                  processed table back to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report standings for one or more tournament CSV files.
    Report(ReportArgs),

    /// List the recognized input columns.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Tournament CSV files. With none, the embedded sample data is used.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Number of leaders to show in the top slice.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Show every row for one player (exact name match).
    #[arg(long = "player", value_name = "NAME")]
    pub player: Option<String>,

    /// Export the processed table (merged when several files are given).
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export per-player totals across the supplied files.
    #[arg(long = "export-totals", value_name = "PATH")]
    pub export_totals: Option<PathBuf>,
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
