use clap::ArgMatches;
use clap::parser::ValueSource;
use std::path::PathBuf;

use crate::args::parsers::parse_filter;
use crate::args::{BenchArgs, PositiveU64};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fill in every setting the command line left at its default.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(args: &mut BenchArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_cli(matches, "target_ms")
        && let Some(target_ms) = config.target_ms
    {
        args.target_ms = ensure_positive_u64(target_ms, "target_ms")?;
    }

    if !is_cli(matches, "filters")
        && let Some(filters) = config.filters.as_ref()
    {
        args.filters = filters
            .iter()
            .map(|filter| parse_filter(filter).map_err(AppError::validation))
            .collect::<AppResult<Vec<_>>>()?;
    }

    if !is_cli(matches, "groups")
        && let Some(groups) = config.groups.as_ref()
    {
        args.groups.clone_from(groups);
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.as_ref()
    {
        args.output = Some(PathBuf::from(output));
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
