//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{BenchArgs, Command, CompareArgs};
pub use types::{OutputFormat, PositiveU64};

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
