mod plan;

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::BenchArgs;
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args(std::env::args_os())? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    let plan = build_plan(args, &matches)?;
    crate::logger::init_logging(plan.verbose, plan.no_color);
    execute_plan(plan.plan)
}

/// Parse the command line. `None` means help or version was printed.
fn parse_args<I>(raw_args: I) -> AppResult<Option<(BenchArgs, ArgMatches)>>
where
    I: IntoIterator<Item = OsString>,
{
    let matches = match BenchArgs::command().try_get_matches_from(raw_args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = BenchArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn help_and_version_are_not_errors() -> AppResult<()> {
        for flag in ["--help", "--version"] {
            if parse_args(os_args(&["stdbench", flag]))?.is_some() {
                return Err(AppError::validation("Expected help/version to stop parsing"));
            }
        }
        Ok(())
    }

    #[test]
    fn invalid_arguments_surface_as_clap_errors() -> AppResult<()> {
        match parse_args(os_args(&["stdbench", "--target-ms", "0"])) {
            Err(AppError::Clap { .. }) => Ok(()),
            Err(err) => Err(err),
            Ok(_) => Err(AppError::validation("Expected a CLI error")),
        }
    }
}
