//! Command-line argument definitions for the taxi star-schema ETL
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};

use crate::constants::DEFAULT_SOURCE_URL;

/// CLI arguments for the taxi star-schema ETL
///
/// Fetches a flat extract of NYC yellow taxi trips and reshapes it into a
/// star schema of one fact table and seven dimension tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taxi-star",
    version,
    about = "Reshape a flat NYC taxi trip extract into a star schema",
    long_about = "Fetches a comma-separated extract of NYC yellow taxi trips, removes exact \
                  duplicate records, derives seven dimension tables (datetime, passenger count, \
                  trip distance, rate code, pickup/dropoff location, payment type) and assembles \
                  a fact table referencing them, then previews the fact table."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Effective command, defaulting to a plain run
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

/// Available subcommands for the taxi star-schema ETL
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the extract-and-reshape pipeline and preview the fact table
    Run(RunArgs),
}

/// Arguments for the run command
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Source URL for the trip extract
    ///
    /// Must serve comma-separated text with a header row using the TLC
    /// yellow-taxi column names. Defaults to the public sample extract.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "Source URL for the trip extract"
    )]
    pub url: Option<String>,

    /// Number of fact-table rows to print after the run
    #[arg(
        long = "preview",
        value_name = "ROWS",
        default_value = "5",
        help = "Fact table rows to preview"
    )]
    pub preview: usize,

    /// Log level for diagnostic output on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Suppress progress and summary output
    #[arg(short = 'q', long = "quiet", help = "Suppress progress and summary output")]
    pub quiet: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            url: None,
            preview: 5,
            log_level: "info".to_string(),
            quiet: false,
        }
    }
}

impl RunArgs {
    /// Effective source URL, falling back to the bundled default
    pub fn source_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }
}
