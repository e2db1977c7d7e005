//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use vacancy_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "vacancy",
    version,
    about = "Vacancy tables and salary statistics from CSV exports",
    long_about = "Filter, sort, and print vacancy tables, or compute salary and\n\
                  vacancy-count statistics by year and by city.\n\n\
                  Field labels in queries use the table headers, e.g. 'Оклад'."
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
    /// Print a filtered and sorted vacancy table.
    Table(TableArgs),

    /// Print salary and vacancy-count statistics.
    Stats(StatsArgs),

    /// Split a vacancy file into one part file per publication year.
    Split(SplitArgs),
}

#[derive(Parser)]
pub struct TableArgs {
    /// Vacancy CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Filter criterion, e.g. "Навыки: Git, SQL" or "Оклад: 100000".
    #[arg(long = "filter", value_name = "CRITERION")]
    pub filter: Option<String>,

    /// Column label to sort by.
    #[arg(long = "sort", value_name = "LABEL")]
    pub sort: Option<String>,

    /// Reverse sort order: "Да" or "Нет".
    #[arg(long = "reverse", value_name = "FLAG")]
    pub reverse: Option<String>,

    /// Row numbers to print: "N" (from N) or "N M" (N through M).
    #[arg(long = "range", value_name = "RANGE")]
    pub range: Option<String>,

    /// Comma-separated column labels to print.
    #[arg(long = "columns", value_name = "LABELS")]
    pub columns: Option<String>,

    /// TOML file with query defaults; explicit flags take precedence.
    #[arg(long = "query", value_name = "FILE")]
    pub query: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Vacancy CSV file (full export or a six-column part file).
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Job name; vacancies whose name contains it are counted separately.
    #[arg(long = "job", value_name = "NAME")]
    pub job: String,

    /// Aggregate each publication year on its own thread.
    #[arg(long = "partitioned")]
    pub partitioned: bool,

    /// Also write the statistics as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Vacancy CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Directory for the part_<year>.csv files.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
