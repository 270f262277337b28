use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::bench::BenchGroup;

use super::defaults::{DEFAULT_BASELINE_LABEL, DEFAULT_CANDIDATE_LABEL, DEFAULT_TIE_THRESHOLD_PCT};
use super::parsers::{parse_bool_env, parse_filter, parse_percentage, parse_positive_u64};
use super::types::{OutputFormat, PositiveU64};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List registered benchmarks
    List,
    /// Compare two CSV result files as a Markdown table
    Compare(CompareArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Results file of the baseline run
    pub baseline: PathBuf,

    /// Results file of the candidate run
    pub candidate: PathBuf,

    /// Name used for the baseline in the report
    #[arg(long = "baseline-label", default_value = DEFAULT_BASELINE_LABEL)]
    pub baseline_label: String,

    /// Name used for the candidate in the report
    #[arg(long = "candidate-label", default_value = DEFAULT_CANDIDATE_LABEL)]
    pub candidate_label: String,

    /// Relative ns/op difference (percent) still counted as a tie
    #[arg(
        long = "tie-threshold",
        default_value_t = DEFAULT_TIE_THRESHOLD_PCT,
        value_parser = parse_percentage
    )]
    pub tie_threshold: f64,

    /// Markdown file prepended to the report
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Write the report to PATH instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "stdbench",
    version,
    about = "Self-calibrating microbenchmarks for Rust standard library primitives - strings, memory, sorting, allocation, formatting, parsing and I/O."
)]
pub struct BenchArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Target measurement time per benchmark (milliseconds)
    #[arg(
        long = "target-ms",
        short = 't',
        default_value = "250",
        value_parser = parse_positive_u64
    )]
    pub target_ms: PositiveU64,

    /// Only run benchmarks whose name contains TEXT (repeatable)
    #[arg(long = "filter", short = 'f', global = true, value_parser = parse_filter)]
    pub filters: Vec<String>,

    /// Only run benchmarks of GROUP (repeatable)
    #[arg(long = "group", short = 'g', global = true, value_enum)]
    pub groups: Vec<BenchGroup>,

    /// Result format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Csv)]
    pub output_format: OutputFormat,

    /// Write results to PATH instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Path to config file (TOML/JSON). Defaults to ./stdbench.toml or ./stdbench.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by STDBENCH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output in logs
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
