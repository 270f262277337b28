//! Calibrated runner: sizes the iteration count of a workload so one
//! measured run lasts roughly the target duration.
mod clock;
mod measurement;


use std::time::Duration;

use tracing::{debug, trace};

use crate::bench::{BenchDef, Sink, Workload};
use crate::error::BenchResult;

pub use clock::{Clock, MonotonicClock};
pub use measurement::Measurement;

/// Calibration stops once the iteration count exceeds this value.
pub const ITERATION_CEILING: u64 = 1 << 30;
/// Calibration stops early once a run takes more than `target / 4`.
const EARLY_STOP_DIVISOR: u128 = 4;
/// Runs shorter than `target / 2` are rescaled.
const RESCALE_THRESHOLD_DIVISOR: u128 = 2;
/// Upper bound on the rescale factor.
pub const RESCALE_CAP: u64 = 8;

/// Outcome of running one registered case end to end.
#[derive(Debug, Clone, Copy)]
pub struct CaseRun {
    pub measurement: Measurement,
    pub checksum: u64,
}

#[derive(Debug, Clone)]
pub struct CalibratedRunner<C = MonotonicClock> {
    clock: C,
    target: Duration,
}

impl CalibratedRunner<MonotonicClock> {
    #[must_use]
    pub fn with_target(target: Duration) -> Self {
        Self::new(MonotonicClock::new(), target)
    }
}

impl<C: Clock> CalibratedRunner<C> {
    #[must_use]
    pub const fn new(clock: C, target: Duration) -> Self {
        Self { clock, target }
    }

    #[must_use]
    pub const fn target(&self) -> Duration {
        self.target
    }

    /// Set up `def`, measure it, and tear it down.
    ///
    /// Teardown runs even when measuring fails.
    ///
    /// # Errors
    ///
    /// Returns the setup or workload error unchanged.
    pub fn run_case(&self, def: &BenchDef) -> BenchResult<CaseRun> {
        let mut workload = def.setup()?;
        let mut sink = Sink::new();
        let result = self.measure(workload.as_mut(), &mut sink);
        workload.teardown();
        let measurement = result?;

        debug!(
            "{}: {} iterations, {} ops in {:?} ({} calibration runs, rescaled: {})",
            def.name,
            measurement.iterations,
            measurement.operations,
            measurement.elapsed,
            measurement.calibration_runs,
            measurement.rescaled
        );

        Ok(CaseRun {
            measurement,
            checksum: sink.checksum(),
        })
    }

    /// Calibrate `workload` by doubling, then rescale once toward the target.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the workload.
    pub fn measure(&self, workload: &mut dyn Workload, sink: &mut Sink) -> BenchResult<Measurement> {
        let target_ns = self.target.as_nanos();
        let mut iterations: u64 = 1;
        let mut calibration_runs: u32 = 0;

        let (mut elapsed, mut operations) = loop {
            let (elapsed, operations) = self.timed(workload, iterations, sink)?;
            calibration_runs = calibration_runs.saturating_add(1);
            let elapsed_ns = elapsed.as_nanos();
            trace!("calibration run {}: {} iterations in {:?}", calibration_runs, iterations, elapsed);

            if elapsed_ns >= target_ns
                || iterations > ITERATION_CEILING
                || elapsed_ns > target_ns / EARLY_STOP_DIVISOR
            {
                break (elapsed, operations);
            }
            iterations = iterations.saturating_mul(2);
        };

        let mut rescaled = false;
        if let Some(scaled) = rescaled_iterations(iterations, elapsed, target_ns) {
            trace!("rescaling {} -> {} iterations", iterations, scaled);
            (elapsed, operations) = self.timed(workload, scaled, sink)?;
            iterations = scaled;
            rescaled = true;
        }

        Ok(Measurement {
            iterations,
            operations,
            elapsed,
            calibration_runs,
            rescaled,
        })
    }

    fn timed(
        &self,
        workload: &mut dyn Workload,
        iterations: u64,
        sink: &mut Sink,
    ) -> BenchResult<(Duration, u64)> {
        let start = self.clock.now();
        let operations = workload.run(iterations, sink)?;
        let end = self.clock.now();
        Ok((end.saturating_sub(start), operations))
    }
}

/// Iteration count for the rescale run, when one is warranted.
///
/// Computes `iterations * target / elapsed` in integer nanoseconds,
/// capped at `iterations * RESCALE_CAP`.
fn rescaled_iterations(iterations: u64, elapsed: Duration, target_ns: u128) -> Option<u64> {
    let elapsed_ns = elapsed.as_nanos();
    if elapsed_ns == 0 || elapsed_ns >= target_ns / RESCALE_THRESHOLD_DIVISOR {
        return None;
    }

    let cap = iterations.saturating_mul(RESCALE_CAP);
    let wanted = u128::from(iterations).saturating_mul(target_ns) / elapsed_ns;
    let scaled = u64::try_from(wanted).map_or(cap, |value| value.min(cap));
    (scaled > iterations).then_some(scaled)
}
