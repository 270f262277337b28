use crate::app::RunSettings;
use crate::args::CompareArgs;
use crate::bench::BenchDef;

pub(in crate::entry) enum RunPlan {
    Run(RunSettings),
    List(Vec<&'static BenchDef>),
    Compare(CompareArgs),
}

/// A plan plus the logging settings resolved alongside it.
pub(in crate::entry) struct Plan {
    pub(in crate::entry) plan: RunPlan,
    pub(in crate::entry) verbose: bool,
    pub(in crate::entry) no_color: bool,
}
