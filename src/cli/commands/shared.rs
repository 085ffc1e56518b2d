//! Shared helpers for CLI commands: logging setup, progress reporting,
//! and run statistics.

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::Result;
use crate::cli::args::RunArgs;

/// Statistics reported after a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub source_rows: usize,
    pub distinct_trips: usize,
    pub duplicates_removed: usize,
    pub dimension_tables: usize,
    pub processing_time_ms: u128,
}

/// Set up structured logging for the run command
pub fn setup_logging(args: &RunArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taxi_star={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a spinner for the network fetch
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the run summary
pub fn print_summary(stats: &PipelineStats) {
    println!("\n{}", "Reshape Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Source rows:".bright_cyan(),
        stats.source_rows.to_string().bright_white()
    );
    if stats.duplicates_removed > 0 {
        println!(
            "  {} {}",
            "Duplicates removed:".bright_cyan(),
            stats.duplicates_removed.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Distinct trips:".bright_cyan(),
        stats.distinct_trips.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Dimension tables:".bright_cyan(),
        stats.dimension_tables.to_string().bright_white()
    );
}
