//! Run command implementation: fetch the extract, reshape it into a star
//! schema, and preview the fact table.

use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{PipelineStats, create_spinner, print_summary, setup_logging};
use crate::Result;
use crate::cli::args::RunArgs;
use crate::extractor::Extractor;
use crate::transformer;

/// Run the complete extract-and-reshape pipeline
pub fn run_pipeline(args: RunArgs) -> Result<PipelineStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    let url = args.source_url().to_string();
    info!("Starting star-schema reshape");
    debug!("Command line arguments: {:?}", args);

    if !args.quiet {
        println!("{}", "Starting taxi trip reshape".bright_green().bold());
        println!("  {} {}", "Source:".bright_cyan(), url);
    }

    let extractor = Extractor::new()?;
    let spinner = (!args.quiet).then(|| create_spinner("Fetching source extract"));
    let raw = match extractor.fetch(&url) {
        Ok(raw) => {
            if let Some(pb) = &spinner {
                pb.finish_with_message(format!("Fetched {} rows", raw.height()));
            }
            raw
        }
        Err(error) => {
            if let Some(pb) = &spinner {
                pb.abandon_with_message("Fetch failed");
            }
            return Err(error);
        }
    };

    let source_rows = raw.height();
    let schema = transformer::reshape(raw)?;
    let distinct_trips = schema.trip_count();

    let stats = PipelineStats {
        source_rows,
        distinct_trips,
        duplicates_removed: source_rows.saturating_sub(distinct_trips),
        dimension_tables: schema.dimensions().len(),
        processing_time_ms: start_time.elapsed().as_millis(),
    };

    if !args.quiet {
        print_summary(&stats);
        if args.preview > 0 {
            println!("\n{}", "Fact table preview".bright_yellow());
            println!("{}", schema.fact.head(Some(args.preview)));
        }
    }

    info!(
        "Reshape complete: {} trips across {} dimension tables",
        distinct_trips, stats.dimension_tables
    );

    Ok(stats)
}
