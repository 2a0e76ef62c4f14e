//! CLI argument definitions for reclink.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "reclink",
    version,
    about = "Score whether two records describe the same entity",
    long_about = "Score whether two records describe the same entity.\n\n\
                  Probabilistic models sum Fellegi-Sunter log-likelihood weights;\n\
                  deterministic models score 1 when any identity key matches exactly.\n\
                  Without --model the bundled patient model is used."
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

    /// Allow record values (PHI) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a pair of JSON records.
    Score(ScoreArgs),

    /// Validate a model and print its field weights.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// First record: a JSON object of string fields.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second record: a JSON object of string fields.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Model file (.toml or .json). Defaults to the bundled patient model.
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Show how each field contributed to the score.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Model file (.toml or .json). Defaults to the bundled patient model.
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,
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
