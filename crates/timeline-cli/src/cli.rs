//! CLI argument definitions for the investor timeline renderer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use timeline_model::SortMode;

#[derive(Parser)]
#[command(
    name = "investor-timeline",
    version,
    about = "Browse investor profiles and their career timelines",
    long_about = "Render a multilingual investor dataset as filtered, sorted timeline cards.\n\n\
                  Without a data file the built-in sample dataset is used."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter, sort and render investor timelines.
    Render(RenderArgs),

    /// List the tag vocabulary of a dataset.
    Tags(TagsArgs),

    /// List the style groups and the tags they select.
    Groups(GroupsArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// Investor dataset (JSON array). Defaults to the built-in sample.
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Display language (zh, en, es, fr); missing text falls back to others.
    #[arg(long = "lang")]
    pub lang: Option<String>,

    /// Only show investors carrying one of these tags (repeatable).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Select a style group; its tags replace any --tag values (repeatable).
    #[arg(long = "group", value_name = "GROUP")]
    pub groups: Vec<String>,

    /// Case-insensitive search over name, summary, theory, strategy and wins.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// First year of the window.
    #[arg(long = "min", allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Last year of the window.
    #[arg(long = "max", allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Result ordering.
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Restore a shared filter state (`lang=en&min=1960&tags=value`).
    /// Explicit flags take precedence.
    #[arg(long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Group table (JSON object of group -> tags) replacing the built-in one.
    #[arg(long = "groups-file", value_name = "PATH")]
    pub groups_file: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Investor dataset (JSON array). Defaults to the built-in sample.
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,
}

#[derive(Args)]
pub struct GroupsArgs {
    /// Group table (JSON object of group -> tags) replacing the built-in one.
    #[arg(long = "groups-file", value_name = "PATH")]
    pub groups_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Default,
    Name,
    Year,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => SortMode::Default,
            SortArg::Name => SortMode::Name,
            SortArg::Year => SortMode::Year,
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
