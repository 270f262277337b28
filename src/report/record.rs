use serde::{Deserialize, Serialize};

use crate::bench::{BenchDef, BenchGroup};
use crate::runner::Measurement;

/// One result row, as written in every output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    #[serde(rename = "benchmark")]
    pub name: String,
    pub group: BenchGroup,
    pub iterations: u64,
    pub operations: u64,
    pub time_ns: u64,
    pub ns_per_op: f64,
    pub ops_per_sec: f64,
}

impl BenchRecord {
    #[must_use]
    pub fn from_measurement(def: &BenchDef, measurement: &Measurement) -> Self {
        Self {
            name: def.name.to_owned(),
            group: def.group,
            iterations: measurement.iterations,
            operations: measurement.operations,
            time_ns: u64::try_from(measurement.elapsed_ns()).unwrap_or(u64::MAX),
            ns_per_op: measurement.ns_per_op(),
            ops_per_sec: measurement.ops_per_sec(),
        }
    }
}
