//! Taxi star-schema ETL library
//!
//! Reshapes a flat extract of NYC yellow taxi trip records into a star
//! schema: one fact table referencing seven row-aligned dimension tables,
//! so that downstream aggregation (average fare by hour of day, trips per
//! weekday, and so on) never has to recompute derived attributes.
//!
//! This library provides tools for:
//! - Fetching the comma-separated source extract over HTTP
//! - Parsing it into a typed in-memory table
//! - Removing exact duplicate records and assigning dense trip ids
//! - Deriving datetime, location, and coded dimension tables
//! - Assembling the fact table with verified row alignment

pub mod constants;
pub mod error;

// Pipeline stages
pub mod extractor;
pub mod transformer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{EtlError, Result};
pub use extractor::Extractor;
pub use transformer::{StarSchema, reshape};
