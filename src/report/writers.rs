use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::format::{format_2dp, write_line};
use super::record::BenchRecord;
use crate::args::OutputFormat;
use crate::error::ReportError;

pub const CSV_HEADER: &str = "benchmark,operations,time_ns,ns_per_op,ops_per_sec";

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    target_ms: u64,
    results: &'a [BenchRecord],
}

/// Streams result records to a destination in the chosen format.
///
/// CSV and JSONL rows are written as soon as each record arrives. JSON is
/// buffered and written as one document by [`ReportWriter::finish`].
pub struct ReportWriter<W: Write> {
    format: OutputFormat,
    target_ms: u64,
    out: W,
    buffered: Vec<BenchRecord>,
    header_written: bool,
}

impl ReportWriter<Box<dyn Write>> {
    /// Writer for `path`, or stdout when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error when the output file cannot be created.
    pub fn open(format: OutputFormat, target_ms: u64, path: Option<&Path>) -> Result<Self, ReportError> {
        let out: Box<dyn Write> = match path {
            Some(path) => {
                let file = File::create(path).map_err(|err| ReportError::CreateOutput {
                    path: path.to_path_buf(),
                    source: err,
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(Self::new(format, target_ms, out))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(format: OutputFormat, target_ms: u64, out: W) -> Self {
        Self {
            format,
            target_ms,
            out,
            buffered: Vec::new(),
            header_written: false,
        }
    }

    /// Emit anything that precedes the first record.
    ///
    /// # Errors
    ///
    /// Returns an error when the destination cannot be written.
    pub fn begin(&mut self) -> Result<(), ReportError> {
        if self.format == OutputFormat::Csv && !self.header_written {
            let mut output = String::new();
            write_line(&mut output, CSV_HEADER)?;
            self.emit(&output)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the record cannot be serialized or written.
    pub fn write_record(&mut self, record: &BenchRecord) -> Result<(), ReportError> {
        match self.format {
            OutputFormat::Csv => {
                self.begin()?;
                let mut output = String::new();
                write_line(&mut output, &csv_row(record))?;
                self.emit(&output)
            }
            OutputFormat::Jsonl => {
                let mut output = serde_json::to_string(record)
                    .map_err(|err| ReportError::Serialize { source: err })?;
                output.push('\n');
                self.emit(&output)
            }
            OutputFormat::Json => {
                self.buffered.push(record.clone());
                Ok(())
            }
        }
    }

    /// Write the trailing JSON document, if any, flush, and hand back the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the final flush fails.
    pub fn finish(mut self) -> Result<W, ReportError> {
        match self.format {
            OutputFormat::Json => {
                let report = JsonReport {
                    generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    target_ms: self.target_ms,
                    results: &self.buffered,
                };
                let mut output = serde_json::to_string_pretty(&report)
                    .map_err(|err| ReportError::Serialize { source: err })?;
                output.push('\n');
                self.emit(&output)?;
            }
            OutputFormat::Csv => self.begin()?,
            OutputFormat::Jsonl => {}
        }
        self.out
            .flush()
            .map_err(|err| ReportError::WriteResults { source: err })?;
        Ok(self.out)
    }

    fn emit(&mut self, output: &str) -> Result<(), ReportError> {
        self.out
            .write_all(output.as_bytes())
            .map_err(|err| ReportError::WriteResults { source: err })
    }
}

fn csv_row(record: &BenchRecord) -> String {
    format!(
        "{},{},{},{},{}",
        record.name,
        record.operations,
        record.time_ns,
        format_2dp(record.ns_per_op),
        format_2dp(record.ops_per_sec)
    )
}
