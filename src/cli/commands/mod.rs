//! Command implementations for the Hilltop processor CLI
//!
//! This module contains the run loop, logging setup, configuration
//! layering, and the end-of-run report.
//! - `process`: decode, assemble, encode and deliver each input file
//! - `shared`: logging, configuration and run statistics

pub mod process;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the Hilltop processor
pub fn run(args: Args) -> Result<RunStats> {
    process::run_process(args)
}
