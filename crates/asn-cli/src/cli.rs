//! CLI argument definitions for the ASN extractor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asn-extract",
    version,
    about = "Normalize scraped aviation incident and aircraft pages into typed records",
    long_about = "Convert raw label/text pairs scraped from incident-report pages\n\
                  into typed, validated records.\n\n\
                  Input is newline-delimited JSON, one scraped page per line:\n\
                  {\"source\":\"<url>\",\"fields\":[[\"Date\",\"Friday 2 January 2015\"],...]}\n\n\
                  Malformed fields degrade to explicit unknowns; only pages without\n\
                  a usable date (or main model) are dropped, with a logged warning."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize scraped incident detail pages.
    Incidents(ExtractArgs),

    /// Normalize scraped aircraft specs pages.
    Aircraft(ExtractArgs),

    /// Reconcile values against a reference vocabulary by fuzzy match.
    Reconcile(ReconcileArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Scraped pages as JSON lines; use "-" for stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write records here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Record output format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: RecordFormatArg,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Reference vocabulary, one candidate per line.
    #[arg(long = "vocab", value_name = "FILE")]
    pub vocab: PathBuf,

    /// Values to reconcile.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

/// Record output formats.
#[derive(Clone, Copy, ValueEnum)]
pub enum RecordFormatArg {
    /// Newline-delimited JSON, one record per line.
    Json,
    /// CSV with a header row.
    Csv,
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
