mod compare;
mod list;
mod runner;

pub(crate) use compare::run_compare;
pub(crate) use list::run_list;
pub(crate) use runner::{RunSettings, run_benchmarks};
