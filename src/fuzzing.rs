use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::parsers::parse_percentage;
use crate::args::{BenchArgs, PositiveU64};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::AppResult;
use crate::report::{ResultSet, parse_results};

thread_local! {
    static BASE_MATCHES: ArgMatches = BenchArgs::command().get_matches_from(["stdbench"]);
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = BenchArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Parses a positive u64 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u64_input(input: &str) -> AppResult<u64> {
    let value: PositiveU64 = input.parse()?;
    Ok(value.get())
}

/// Parses a tie-threshold percentage.
///
/// # Errors
///
/// Returns an error when the value is not a finite, non-negative number.
pub fn parse_percentage_input(input: &str) -> AppResult<f64> {
    parse_percentage(input)
}

/// Parses results text.
///
/// # Errors
///
/// Returns an error when the text has no header or no `benchmark` column.
pub fn parse_results_input(input: &str) -> AppResult<ResultSet> {
    Ok(parse_results(input)?)
}
