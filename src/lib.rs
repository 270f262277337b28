//! Core library for the `stdbench` CLI.
//!
//! This crate provides the building blocks used by the binary: the
//! calibrated runner, the registry of standard-library benchmark cases, CLI
//! argument types, configuration parsing, and result reporting. The primary
//! user-facing interface is the `stdbench` command-line application; library
//! APIs may evolve as the CLI grows.
pub mod args;
pub mod bench;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
