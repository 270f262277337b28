use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::args::OutputFormat;
use crate::bench::BenchDef;
use crate::error::AppResult;
use crate::report::{BenchRecord, ReportWriter};
use crate::runner::CalibratedRunner;

/// Everything a benchmark run needs once arguments and config are merged.
#[derive(Debug, Clone)]
pub(crate) struct RunSettings {
    pub(crate) target_ms: u64,
    pub(crate) cases: Vec<&'static BenchDef>,
    pub(crate) output_format: OutputFormat,
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_benchmarks(settings: &RunSettings) -> AppResult<()> {
    let runner = CalibratedRunner::with_target(Duration::from_millis(settings.target_ms));
    let total = settings.cases.len();
    info!(
        "Running {} benchmark(s), target {:?} each",
        total,
        runner.target()
    );

    let mut writer = ReportWriter::open(
        settings.output_format,
        settings.target_ms,
        settings.output.as_deref(),
    )?;
    writer.begin()?;

    for (idx, def) in settings.cases.iter().enumerate() {
        debug!("[{}/{}] {} ({})", idx + 1, total, def.name, def.group);
        let run = runner.run_case(def)?;
        debug!("{} checksum {:#018x}", def.name, run.checksum);
        let record = BenchRecord::from_measurement(def, &run.measurement);
        info!(
            "{}: {:.2} ns/op, {:.2} ops/s",
            record.name, record.ns_per_op, record.ops_per_sec
        );
        writer.write_record(&record)?;
    }

    writer.finish()?;
    if let Some(path) = settings.output.as_ref() {
        info!("Results written to {}", path.display());
    }
    Ok(())
}
