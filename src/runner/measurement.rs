use std::time::Duration;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Final numbers for one case after calibration and the optional rescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Iteration count of the reported run.
    pub iterations: u64,
    /// Operations the reported run performed.
    pub operations: u64,
    /// Elapsed time of the reported run.
    pub elapsed: Duration,
    /// Workload calls made while calibrating, excluding the rescale run.
    pub calibration_runs: u32,
    pub rescaled: bool,
}

impl Measurement {
    #[must_use]
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Nanoseconds per operation, or zero when nothing was performed.
    #[must_use]
    pub fn ns_per_op(&self) -> f64 {
        if self.operations == 0 {
            return 0.0;
        }
        self.elapsed_ns() as f64 / self.operations as f64
    }

    /// Operations per second, or zero when `ns_per_op` is zero.
    #[must_use]
    pub fn ops_per_sec(&self) -> f64 {
        let ns_per_op = self.ns_per_op();
        if ns_per_op > 0.0 {
            NANOS_PER_SEC / ns_per_op
        } else {
            0.0
        }
    }
}
