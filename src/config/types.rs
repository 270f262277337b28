use serde::Deserialize;

use crate::args::OutputFormat;
use crate::bench::BenchGroup;

/// Settings accepted from `stdbench.toml` / `stdbench.json`.
///
/// Every field is optional; flags given on the command line win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub target_ms: Option<u64>,
    pub filters: Option<Vec<String>>,
    pub groups: Option<Vec<BenchGroup>>,
    pub output: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}
