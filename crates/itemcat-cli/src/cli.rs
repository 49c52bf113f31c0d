//! CLI argument definitions for the item-catalog merge tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use itemcat_cli::defaults;

#[derive(Parser)]
#[command(
    name = "itemcat",
    version,
    about = "Merge bilingual item catalogs into a combined CSV",
    long_about = "Join the Chinese and English item catalog exports by item id,\n\
                  keep only the configured furnishing categories, and write a\n\
                  combined CSV with both names and a category label."
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
    /// Merge the two catalog exports and write the combined CSV.
    Merge(MergeArgs),

    /// List the built-in category codes and labels.
    Categories,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Chinese catalog CSV (id, name, category code).
    #[arg(long = "chinese", value_name = "PATH", default_value = defaults::CHINESE_CATALOG)]
    pub chinese: PathBuf,

    /// English catalog CSV (id, name).
    #[arg(long = "english", value_name = "PATH", default_value = defaults::ENGLISH_CATALOG)]
    pub english: PathBuf,

    /// Merged output CSV.
    #[arg(long = "output", value_name = "PATH", default_value = defaults::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also write a JSON run report (entry count and skip statistics).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
