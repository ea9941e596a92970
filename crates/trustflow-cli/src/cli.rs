//! CLI argument definitions for the trustflow reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trustflow",
    version,
    about = "Reconcile topical trust flow and backlink CSV exports",
    long_about = "Extract topical trust flow entries matching a topic substring from a\n\
                  metrics export, and optionally reconcile them against a per-target\n\
                  link export on canonical domain."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter a metrics export down to topic matches and write the long form.
    Filter(FilterArgs),

    /// Filter a metrics export and reconcile it against a link export.
    Reconcile(ReconcileArgs),

    /// List the columns both exports are expected to carry.
    Columns,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Path to the metrics export CSV.
    #[arg(value_name = "METRICS_CSV")]
    pub metrics: PathBuf,

    /// Keep rows whose topic contains this substring.
    #[arg(long = "topic", value_name = "SUBSTRING")]
    pub topic: String,

    /// Match the topic substring literally instead of case-insensitively.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Output CSV path (default: <METRICS_CSV stem>_filtered.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report counts without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the metrics export CSV.
    #[arg(value_name = "METRICS_CSV")]
    pub metrics: PathBuf,

    /// Path to the link export CSV.
    #[arg(value_name = "LINKS_CSV")]
    pub links: PathBuf,

    /// Keep rows whose topic contains this substring.
    #[arg(long = "topic", value_name = "SUBSTRING")]
    pub topic: String,

    /// Match the topic substring literally instead of case-insensitively.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Output CSV path (default: <METRICS_CSV stem>_reconciled.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the derived ratio column in the merged output.
    #[arg(long = "ratio-column", value_name = "NAME")]
    pub ratio_column: Option<String>,

    /// Also write a machine-readable run summary to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Report counts without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
