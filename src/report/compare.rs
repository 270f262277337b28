//! Reading result files back and comparing two runs.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::format::write_line;
use crate::error::ReportError;

const NANOS_PER_SEC: f64 = 1e9;
const BOM: char = '\u{feff}';

/// Metrics recovered from one results row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub operations: f64,
    pub time_ns: f64,
    pub ns_per_op: f64,
    pub ops_per_sec: f64,
}

/// Rows keyed by benchmark name. A repeated name keeps the last row.
pub type ResultSet = BTreeMap<String, ResultRow>;

/// Parse CSV results.
///
/// The delimiter is `;` when the header has at least as many semicolons as
/// commas, otherwise `,`. Columns are found by header name and only
/// `benchmark` is required; `ns_per_op` and `ops_per_sec` are derived when
/// missing, and rows where neither can be recovered are skipped.
///
/// # Errors
///
/// Returns an error when the text has no header or no `benchmark` column.
pub fn parse_results(text: &str) -> Result<ResultSet, ReportError> {
    let mut lines = text
        .lines()
        .map(|line| line.trim().trim_start_matches(BOM).trim())
        .filter(|line| !line.is_empty());
    let mut header_line = lines.next().ok_or(ReportError::EmptyResults)?;

    let delimiter = if header_line.contains(';')
        && header_line.matches(';').count() >= header_line.matches(',').count()
    {
        ';'
    } else {
        ','
    };
    // Older semicolon files carry a stray "1," before the header.
    if delimiter == ';'
        && let Some(rest) = header_line.strip_prefix("1,")
    {
        header_line = rest;
    }

    let header: Vec<&str> = header_line.split(delimiter).map(str::trim).collect();
    let column = |name: &str| header.iter().position(|column| *column == name);
    let benchmark = column("benchmark").ok_or(ReportError::MissingBenchmarkColumn)?;
    let operations = column("operations");
    let time_ns = column("time_ns");
    let ns_per_op = column("ns_per_op");
    let ops_per_sec = column("ops_per_sec");

    let mut results = ResultSet::new();
    for line in lines {
        let parts: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if parts.len() < 2 {
            continue;
        }
        let Some(name) = field(&parts, benchmark) else {
            continue;
        };
        let metrics = RawMetrics {
            operations: operations.and_then(|idx| number(&parts, idx)),
            time_ns: time_ns.and_then(|idx| number(&parts, idx)),
            ns_per_op: ns_per_op.and_then(|idx| number(&parts, idx)),
            ops_per_sec: ops_per_sec.and_then(|idx| number(&parts, idx)),
        };
        if let Some(row) = metrics.derive() {
            results.insert(name.to_owned(), row);
        }
    }
    Ok(results)
}

fn field<'a>(parts: &[&'a str], idx: usize) -> Option<&'a str> {
    parts.get(idx).copied().filter(|value| !value.is_empty())
}

fn number(parts: &[&str], idx: usize) -> Option<f64> {
    field(parts, idx)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

struct RawMetrics {
    operations: Option<f64>,
    time_ns: Option<f64>,
    ns_per_op: Option<f64>,
    ops_per_sec: Option<f64>,
}

impl RawMetrics {
    fn derive(self) -> Option<ResultRow> {
        let nonzero = |value: Option<f64>| value.filter(|v| *v != 0.0);
        let both_nonzero = nonzero(self.operations).zip(nonzero(self.time_ns));

        let finite = |value: f64| value.is_finite().then_some(value);

        let ns_per_op = self
            .ns_per_op
            .or_else(|| both_nonzero.map(|(ops, time)| time / ops))
            .and_then(finite)?;
        let ops_per_sec = self
            .ops_per_sec
            .or_else(|| nonzero(Some(ns_per_op)).map(|ns| NANOS_PER_SEC / ns))
            .or_else(|| both_nonzero.map(|(ops, time)| ops / (time / NANOS_PER_SEC)))
            .and_then(finite)?;

        Some(ResultRow {
            operations: self.operations.unwrap_or(0.0),
            time_ns: self.time_ns.unwrap_or(0.0),
            ns_per_op,
            ops_per_sec,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Baseline,
    Candidate,
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub benchmark: String,
    pub baseline_ns: f64,
    pub candidate_ns: f64,
    /// `(candidate / baseline - 1) * 100`; positive means the candidate is slower.
    pub rel_pct: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub tie_threshold_pct: f64,
    pub baseline_wins: usize,
    pub candidate_wins: usize,
    pub ties: usize,
    /// Benchmarks present in only one of the two files.
    pub unmatched: usize,
}

/// Compare ns/op for every benchmark present in both sets, by name.
#[must_use]
pub fn compare(baseline: &ResultSet, candidate: &ResultSet, tie_threshold_pct: f64) -> Comparison {
    let mut comparison = Comparison {
        rows: Vec::new(),
        tie_threshold_pct,
        baseline_wins: 0,
        candidate_wins: 0,
        ties: 0,
        unmatched: candidate
            .keys()
            .filter(|name| !baseline.contains_key(*name))
            .count(),
    };

    for (name, base) in baseline {
        let Some(cand) = candidate.get(name) else {
            comparison.unmatched += 1;
            continue;
        };
        let (rel_pct, winner) = judge(base.ns_per_op, cand.ns_per_op, tie_threshold_pct);
        match winner {
            Winner::Baseline => comparison.baseline_wins += 1,
            Winner::Candidate => comparison.candidate_wins += 1,
            Winner::Tie => comparison.ties += 1,
        }
        comparison.rows.push(ComparisonRow {
            benchmark: name.clone(),
            baseline_ns: base.ns_per_op,
            candidate_ns: cand.ns_per_op,
            rel_pct,
            winner,
        });
    }
    comparison
}

fn judge(baseline_ns: f64, candidate_ns: f64, tie_threshold_pct: f64) -> (f64, Winner) {
    if baseline_ns == 0.0 && candidate_ns == 0.0 {
        return (0.0, Winner::Tie);
    }
    let rel_pct = (candidate_ns / baseline_ns - 1.0) * 100.0;
    if rel_pct.is_nan() {
        return (0.0, Winner::Tie);
    }
    if rel_pct.abs() <= tie_threshold_pct {
        (rel_pct, Winner::Tie)
    } else if rel_pct > 0.0 {
        (rel_pct, Winner::Baseline)
    } else {
        (rel_pct, Winner::Candidate)
    }
}

/// Labels and extras for [`render_markdown`].
#[derive(Debug, Clone)]
pub struct MarkdownOptions<'a> {
    pub baseline_label: &'a str,
    pub candidate_label: &'a str,
    /// Markdown placed before the generated sections.
    pub header: Option<&'a str>,
    pub date: NaiveDate,
}

/// Render a comparison as a Markdown report.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render_markdown(comparison: &Comparison, options: &MarkdownOptions<'_>) -> Result<String, ReportError> {
    let base = options.baseline_label;
    let cand = options.candidate_label;
    let mut output = String::new();

    if let Some(header) = options.header {
        let header = header.trim_start_matches(BOM).trim_end();
        if !header.is_empty() {
            write_line(&mut output, header)?;
            write_line(&mut output, "")?;
        }
    }

    write_line(&mut output, &format!("## Benchmark Results: {} vs {}", base, cand))?;
    write_line(&mut output, "")?;
    write_line(
        &mut output,
        &format!("Platform: {} {}", std::env::consts::OS, std::env::consts::ARCH),
    )?;
    write_line(&mut output, &format!("Date: {}", options.date.format("%Y-%m-%d")))?;
    write_line(&mut output, "")?;
    write_line(
        &mut output,
        &format!(
            "Each row compares {} against the {} baseline (lower ns/op is better).",
            cand, base
        ),
    )?;
    write_line(&mut output, "")?;

    let columns = [
        "Benchmark".to_owned(),
        format!("{} ns/op", base),
        format!("{} ns/op", cand),
        format!("{} vs {}", cand, base),
        "Winner".to_owned(),
    ];
    write_line(&mut output, &format!("| {} |", columns.join(" | ")))?;
    let rule: Vec<String> = columns
        .iter()
        .map(|column| "-".repeat(column.chars().count() + 2))
        .collect();
    write_line(&mut output, &format!("|{}|", rule.join("|")))?;

    for row in &comparison.rows {
        let winner = match row.winner {
            Winner::Baseline => base,
            Winner::Candidate => cand,
            Winner::Tie => "tie",
        };
        write_line(
            &mut output,
            &format!(
                "| {} | {:.2} | {:.2} | {} | {} |",
                row.benchmark,
                row.baseline_ns,
                row.candidate_ns,
                relative(row, comparison.tie_threshold_pct),
                winner
            ),
        )?;
    }

    write_line(&mut output, "")?;
    write_line(&mut output, "### Summary")?;
    write_line(&mut output, "")?;
    write_line(&mut output, &format!("- Benchmarks compared: {}", comparison.rows.len()))?;
    if comparison.unmatched > 0 {
        write_line(
            &mut output,
            &format!("- Present in only one file: {}", comparison.unmatched),
        )?;
    }
    write_line(
        &mut output,
        &format!("- {} faster (ns/op): {}", base, comparison.baseline_wins),
    )?;
    write_line(
        &mut output,
        &format!("- {} faster (ns/op): {}", cand, comparison.candidate_wins),
    )?;
    write_line(&mut output, &format!("- Ties (ns/op): {}", comparison.ties))?;
    let overall = if comparison.baseline_wins > comparison.candidate_wins {
        format!("Overall (by count): {} wins more benchmarks.", base)
    } else if comparison.candidate_wins > comparison.baseline_wins {
        format!("Overall (by count): {} wins more benchmarks.", cand)
    } else {
        "Overall (by count): tie.".to_owned()
    };
    write_line(&mut output, &overall)?;
    Ok(output)
}

fn relative(row: &ComparisonRow, tie_threshold_pct: f64) -> String {
    match row.winner {
        Winner::Tie if row.baseline_ns == 0.0 && row.candidate_ns == 0.0 => "0.00% (tie)".to_owned(),
        Winner::Tie => format!("{:+.2}% (tie ≤{:.2}%)", row.rel_pct, tie_threshold_pct),
        Winner::Baseline => format!("-{:.2}% slower", row.rel_pct),
        Winner::Candidate => format!("+{:.2}% faster", -row.rel_pct),
    }
}
