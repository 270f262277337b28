mod app;
mod bench;
mod config;
mod report;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use bench::{BenchError, BenchResult};
pub use config::ConfigError;
pub use report::ReportError;
pub use validation::ValidationError;
