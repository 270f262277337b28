mod app;
mod args;
mod bench;
mod config;
mod entry;
mod error;
mod logger;
mod report;
mod runner;

use std::process::ExitCode;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use error::AppError;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Clap { source }) => {
            if let Err(err) = source.print() {
                eprintln!("FATAL: {}", err);
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("FATAL: {}", err);
            ExitCode::FAILURE
        }
    }
}
