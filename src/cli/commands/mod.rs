//! Command implementations for the taxi star-schema CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface.

pub mod run;
pub mod shared;

pub use shared::PipelineStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the taxi star-schema ETL
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<PipelineStats> {
    match args.get_command() {
        Commands::Run(run_args) => run::run_pipeline(run_args),
    }
}
