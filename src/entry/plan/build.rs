use clap::ArgMatches;

use crate::app::RunSettings;
use crate::args::{BenchArgs, Command};
use crate::bench::select;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};

use super::types::{Plan, RunPlan};

pub(in crate::entry) fn build_plan(mut args: BenchArgs, matches: &ArgMatches) -> AppResult<Plan> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }

    let plan = match args.command.take() {
        Some(Command::Compare(compare_args)) => RunPlan::Compare(compare_args),
        Some(Command::List) => RunPlan::List(select(&args.filters, &args.groups)),
        None => {
            let cases = select(&args.filters, &args.groups);
            if cases.is_empty() {
                return Err(AppError::validation(ValidationError::NoBenchmarksSelected));
            }
            RunPlan::Run(RunSettings {
                target_ms: args.target_ms.get(),
                cases,
                output_format: args.output_format,
                output: args.output.take(),
            })
        }
    };

    Ok(Plan {
        plan,
        verbose: args.verbose,
        no_color: args.no_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    fn plan_for(argv: &[&str]) -> AppResult<Plan> {
        let matches = BenchArgs::command().try_get_matches_from(argv)?;
        let args = BenchArgs::from_arg_matches(&matches)?;
        build_plan(args, &matches)
    }

    #[test]
    fn run_plan_selects_filtered_cases() -> AppResult<()> {
        let plan = plan_for(&["stdbench", "-c", "missing.toml", "-f", "strn"]);
        // An explicit config path that does not exist is an error.
        if plan.is_ok() {
            return Err(AppError::validation("Expected missing config to fail"));
        }

        let dir = tempfile::tempdir()?;
        let config = dir.path().join("stdbench.toml");
        std::fs::write(&config, "target_ms = 3\n")?;
        let config_arg = config.to_string_lossy().into_owned();
        let plan = plan_for(&["stdbench", "-c", config_arg.as_str(), "-f", "strn"])?;
        match plan.plan {
            RunPlan::Run(settings) => {
                let names: Vec<&str> = settings.cases.iter().map(|def| def.name).collect();
                if names != ["strnlen", "strncmp", "strncpy", "strncat"] {
                    return Err(AppError::validation(format!("Unexpected cases: {:?}", names)));
                }
                if settings.target_ms != 3 {
                    return Err(AppError::validation("Config target_ms not applied"));
                }
                Ok(())
            }
            RunPlan::List(_) | RunPlan::Compare(_) => Err(AppError::validation("Expected a run plan")),
        }
    }

    #[test]
    fn empty_selection_is_rejected() -> AppResult<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("empty.json");
        std::fs::write(&config, "{}")?;
        let config_arg = config.to_string_lossy().into_owned();
        match plan_for(&["stdbench", "-c", config_arg.as_str(), "-f", "no-such-benchmark"]) {
            Err(AppError::Validation(ValidationError::NoBenchmarksSelected)) => Ok(()),
            Err(err) => Err(err),
            Ok(_) => Err(AppError::validation("Expected empty selection to fail")),
        }
    }

    #[test]
    fn list_plan_uses_group_filter() -> AppResult<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("empty.json");
        std::fs::write(&config, "{}")?;
        let config_arg = config.to_string_lossy().into_owned();
        let plan = plan_for(&["stdbench", "-c", config_arg.as_str(), "list", "-g", "sort"])?;
        match plan.plan {
            RunPlan::List(cases) => {
                let names: Vec<&str> = cases.iter().map(|def| def.name).collect();
                if names != ["qsort_int", "bsearch_int"] {
                    return Err(AppError::validation(format!("Unexpected cases: {:?}", names)));
                }
                Ok(())
            }
            RunPlan::Run(_) | RunPlan::Compare(_) => Err(AppError::validation("Expected a list plan")),
        }
    }
}
