//! Benchmark cases: the workload abstraction, the side-effect sink and the
//! registry of standard-library primitives measured by the harness.
pub mod buffers;
mod registry;
mod sink;
pub mod suites;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::BenchResult;

pub use registry::{find, registry, select};
pub use sink::Sink;

/// Repeatable unit of work owned by a single benchmark case.
///
/// The value is produced once by [`BenchDef::setup`] and torn down exactly
/// once by [`Workload::teardown`], which consumes it.
pub trait Workload {
    /// Perform `iterations` repetitions and return how many elementary
    /// operations were executed.
    ///
    /// # Errors
    ///
    /// Returns an error when the workload cannot allocate or perform I/O.
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64>;

    /// Release the case state. Called after the final `run`.
    fn teardown(self: Box<Self>) {}
}

/// Setup function producing a case's workload state.
pub type SetupFn = fn() -> BenchResult<Box<dyn Workload>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchGroup {
    String,
    Memory,
    Sort,
    Alloc,
    Format,
    Parse,
    Io,
}

impl BenchGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BenchGroup::String => "string",
            BenchGroup::Memory => "memory",
            BenchGroup::Sort => "sort",
            BenchGroup::Alloc => "alloc",
            BenchGroup::Format => "format",
            BenchGroup::Parse => "parse",
            BenchGroup::Io => "io",
        }
    }
}

impl std::fmt::Display for BenchGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named benchmark case descriptor.
#[derive(Clone, Copy)]
pub struct BenchDef {
    pub name: &'static str,
    pub group: BenchGroup,
    pub setup: SetupFn,
}

impl BenchDef {
    #[must_use]
    pub const fn new(name: &'static str, group: BenchGroup, setup: SetupFn) -> Self {
        Self { name, group, setup }
    }

    /// Run the one-time preparation for this case.
    ///
    /// # Errors
    ///
    /// Returns an error when the case inputs cannot be allocated or built.
    pub fn setup(&self) -> BenchResult<Box<dyn Workload>> {
        (self.setup)()
    }
}

impl std::fmt::Debug for BenchDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchDef")
            .field("name", &self.name)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
