//! CLI argument definitions for the mapping audit.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fnmap_validate::DuplicateScope;

#[derive(Parser)]
#[command(
    name = "fnmap-audit",
    version,
    about = "Audit a title/function mapping CSV for data-quality issues",
    long_about = "Audit a CSV mapping product titles to functions and function groups.\n\n\
                  Detects duplicate rows, null values, inconsistent casing/ordering,\n\
                  one-to-many mapping violations, and within-row duplicate functions,\n\
                  then writes a Markdown summary report."
)]
pub struct Cli {
    /// Path to the input CSV (columns: title, functions, function_group).
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Report output path (default: report.md beside the input file).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Scope of the "seen" set in the within-row duplicate check.
    ///
    /// `global` keeps the historical shared-across-rows accumulation;
    /// `per-row` resets the set for every row.
    #[arg(long = "duplicate-scope", value_enum, default_value = "global")]
    pub duplicate_scope: DuplicateScopeArg,

    /// Run every check and print the summary without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DuplicateScopeArg {
    Global,
    PerRow,
}

impl From<DuplicateScopeArg> for DuplicateScope {
    fn from(value: DuplicateScopeArg) -> Self {
        match value {
            DuplicateScopeArg::Global => DuplicateScope::Global,
            DuplicateScopeArg::PerRow => DuplicateScope::PerRow,
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
