use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use crate::args::CompareArgs;
use crate::error::{AppError, AppResult, ReportError};
use crate::report::{MarkdownOptions, ResultSet, compare, parse_results, render_markdown};

pub(crate) fn run_compare(args: &CompareArgs) -> AppResult<()> {
    let baseline = read_results(&args.baseline)?;
    let candidate = read_results(&args.candidate)?;
    let header = args
        .header
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path).map_err(|err| {
                AppError::report(ReportError::ReadHeader {
                    path: path.clone(),
                    source: err,
                })
            })
        })
        .transpose()?;

    let comparison = compare(&baseline, &candidate, args.tie_threshold);
    if comparison.rows.is_empty() {
        warn!("No benchmark appears in both result files");
    }
    let markdown = render_markdown(
        &comparison,
        &MarkdownOptions {
            baseline_label: &args.baseline_label,
            candidate_label: &args.candidate_label,
            header: header.as_deref(),
            date: Local::now().date_naive(),
        },
    )?;

    match args.output.as_ref() {
        Some(path) => {
            std::fs::write(path, markdown).map_err(|err| {
                AppError::report(ReportError::CreateOutput {
                    path: path.clone(),
                    source: err,
                })
            })?;
            info!("Wrote {}", path.display());
        }
        None => write_markdown(&mut io::stdout().lock(), &markdown)?,
    }
    Ok(())
}

fn write_markdown<W: Write>(out: &mut W, markdown: &str) -> Result<(), ReportError> {
    out.write_all(markdown.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| ReportError::WriteResults { source: err })
}

fn read_results(path: &Path) -> AppResult<ResultSet> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        AppError::report(ReportError::ReadResults {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let results = parse_results(&text)?;
    info!("Loaded {} result(s) from {}", results.len(), path.display());
    Ok(results)
}
