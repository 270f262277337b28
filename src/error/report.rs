use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write line: {source}")]
    WriteLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to write results: {source}")]
    WriteResults {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create output '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize results: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read results '{path}': {source}")]
    ReadResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read header '{path}': {source}")]
    ReadHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Results file is empty.")]
    EmptyResults,
    #[error("No 'benchmark' column in results header.")]
    MissingBenchmarkColumn,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
