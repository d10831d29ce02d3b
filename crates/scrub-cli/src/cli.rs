//! CLI argument definitions for registry-scrub.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use scrub_model::options::{
    DEFAULT_EDIT_DISTANCE_THRESHOLD, DEFAULT_FREQUENCY_THRESHOLD, DEFAULT_MISSING_VALUE_LABEL,
    DEFAULT_REFERENCE_DISTANCE_THRESHOLD,
};

#[derive(Parser)]
#[command(
    name = "registry-scrub",
    version,
    about = "Clean noisy free-text name columns in survey and registry CSV data",
    long_about = "Collapse spelling variants of entity names into canonical spellings,\n\
                  treat \"no value\" variants as missing, and drop duplicate records\n\
                  that describe the same entity, keeping the most complete row."
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
    /// Clean a CSV file and write the deduplicated result.
    Clean(CleanArgs),

    /// Print the canonical reference set derived from a CSV file.
    References(ReferencesArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_unique.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Stop-word list, one lowercase token per line. Trailing stop words are
    /// ignored when comparing name strings.
    #[arg(long = "stop-words", value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// The free-text column to normalize and autocorrect.
    #[arg(long = "target-column", value_name = "NAME")]
    pub target_column: String,

    /// First identity column for duplicate detection.
    #[arg(long = "id-column-1", value_name = "NAME")]
    pub identity_column_1: String,

    /// Second identity column for duplicate detection.
    #[arg(long = "id-column-2", value_name = "NAME")]
    pub identity_column_2: String,

    /// Minimum occurrence count to qualify as a reference candidate.
    #[arg(long = "frequency-threshold", default_value_t = DEFAULT_FREQUENCY_THRESHOLD)]
    pub frequency_threshold: usize,

    /// Max edit distance to merge two candidates during reference reduction.
    #[arg(
        long = "reference-distance-threshold",
        default_value_t = DEFAULT_REFERENCE_DISTANCE_THRESHOLD
    )]
    pub reference_distance_threshold: usize,

    /// Max edit distance to accept an autocorrection match.
    #[arg(
        long = "edit-distance-threshold",
        default_value_t = DEFAULT_EDIT_DISTANCE_THRESHOLD
    )]
    pub edit_distance_threshold: usize,

    /// Label filled into target cells that remain missing after correction.
    #[arg(long = "missing-label", default_value = DEFAULT_MISSING_VALUE_LABEL)]
    pub missing_label: String,

    /// Run the pipeline and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReferencesArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Stop-word list, one lowercase token per line.
    #[arg(long = "stop-words", value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// The free-text column to derive references from.
    #[arg(long = "target-column", value_name = "NAME")]
    pub target_column: String,

    /// Minimum occurrence count to qualify as a reference candidate.
    #[arg(long = "frequency-threshold", default_value_t = DEFAULT_FREQUENCY_THRESHOLD)]
    pub frequency_threshold: usize,

    /// Max edit distance to merge two candidates during reference reduction.
    #[arg(
        long = "reference-distance-threshold",
        default_value_t = DEFAULT_REFERENCE_DISTANCE_THRESHOLD
    )]
    pub reference_distance_threshold: usize,
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
