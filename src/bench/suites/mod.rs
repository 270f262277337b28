//! Benchmark bodies, one module per family of primitives.
pub mod alloc;
pub mod format;
pub mod io;
pub mod memory;
pub mod parse;
pub mod sort;
pub mod string;

#[cfg(test)]
pub(crate) mod test_support;
