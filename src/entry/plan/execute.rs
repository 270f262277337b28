use crate::app::{run_benchmarks, run_compare, run_list};
use crate::error::AppResult;

use super::types::RunPlan;

pub(in crate::entry) fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Run(settings) => run_benchmarks(&settings),
        RunPlan::List(cases) => run_list(&cases),
        RunPlan::Compare(compare_args) => run_compare(&compare_args),
    }
}
