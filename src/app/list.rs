use std::io::Write;

use crate::bench::BenchDef;
use crate::error::AppResult;

pub(crate) fn run_list(cases: &[&'static BenchDef]) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for def in cases {
        writeln!(out, "{},{}", def.name, def.group)?;
    }
    out.flush()?;
    Ok(())
}
