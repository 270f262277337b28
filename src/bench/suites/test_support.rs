use crate::bench::{Sink, Workload};
use crate::error::BenchResult;

/// Build a workload, run it for `iterations`, tear it down and return the
/// reported op count together with the sink used.
pub(crate) fn run_workload(
    setup: fn() -> BenchResult<Box<dyn Workload>>,
    iterations: u64,
) -> Result<(u64, Sink), String> {
    let mut workload = setup().map_err(|err| format!("setup failed: {}", err))?;
    let mut sink = Sink::new();
    let ops = workload
        .run(iterations, &mut sink)
        .map_err(|err| format!("run failed: {}", err))?;
    workload.teardown();
    Ok((ops, sink))
}

pub(crate) fn expect_ops(
    setup: fn() -> BenchResult<Box<dyn Workload>>,
    iterations: u64,
    expected: u64,
) -> Result<Sink, String> {
    let (ops, sink) = run_workload(setup, iterations)?;
    if ops != expected {
        return Err(format!("Expected {} ops, got {}", expected, ops));
    }
    Ok(sink)
}
