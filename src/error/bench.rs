use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("out of memory (failed to allocate {bytes} bytes)")]
    OutOfMemory { bytes: usize },
    #[error("Failed to compile regex '{pattern}': {source}")]
    Regex {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("I/O failure during {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to format benchmark input: {source}")]
    Format {
        #[from]
        source: std::fmt::Error,
    },
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

pub type BenchResult<T> = Result<T, BenchError>;
