//! Reshaping of the raw trip extract into a star schema.
//!
//! The pipeline runs four strictly ordered steps: timestamp coercion,
//! deduplication with trip id assignment, dimension derivation, and fact
//! assembly. Later steps depend on the trip ids assigned during
//! deduplication, so the order is fixed.

pub mod coerce;
pub mod dedup;
pub mod dimensions;
pub mod fact;

#[cfg(test)]
pub mod tests;

use polars::prelude::*;
use tracing::{debug, info};

use crate::constants::EXPECTED_COLUMNS;
use crate::error::{EtlError, Result};

/// The reshaped output: one fact table plus seven dimension tables.
///
/// Every table holds exactly one row per deduplicated trip. Each dimension
/// surrogate id equals the originating trip id by construction, so the fact
/// table's references are row-aligned with every dimension table.
#[derive(Debug, Clone)]
pub struct StarSchema {
    pub fact: DataFrame,
    pub datetime_dim: DataFrame,
    pub passenger_count_dim: DataFrame,
    pub trip_distance_dim: DataFrame,
    pub rate_code_dim: DataFrame,
    pub pickup_location_dim: DataFrame,
    pub dropoff_location_dim: DataFrame,
    pub payment_type_dim: DataFrame,
}

impl StarSchema {
    /// Dimension tables keyed by their conventional names
    pub fn dimensions(&self) -> [(&'static str, &DataFrame); 7] {
        [
            ("datetime_dim", &self.datetime_dim),
            ("passenger_count_dim", &self.passenger_count_dim),
            ("trip_distance_dim", &self.trip_distance_dim),
            ("rate_code_dim", &self.rate_code_dim),
            ("pickup_location_dim", &self.pickup_location_dim),
            ("dropoff_location_dim", &self.dropoff_location_dim),
            ("payment_type_dim", &self.payment_type_dim),
        ]
    }

    /// Number of trips represented in every table of the schema
    pub fn trip_count(&self) -> usize {
        self.fact.height()
    }
}

/// Reshape the raw extract into a star schema.
///
/// Aborts on the first failure; either all eight tables are produced or
/// none are.
pub fn reshape(raw: DataFrame) -> Result<StarSchema> {
    check_schema(&raw)?;

    let mut base = raw;
    coerce::coerce_timestamps(&mut base)?;

    let base = dedup::dedup_and_index(base)?;
    info!("Deduplicated extract holds {} trips", base.height());

    let dims = dimensions::derive_dimensions(&base)?;
    let fact = fact::assemble_fact(&base, &dims)?;
    debug!(
        "Assembled fact table: {} rows x {} columns",
        fact.height(),
        fact.width()
    );

    Ok(StarSchema {
        fact,
        datetime_dim: dims.datetime,
        passenger_count_dim: dims.passenger_count,
        trip_distance_dim: dims.trip_distance,
        rate_code_dim: dims.rate_code,
        pickup_location_dim: dims.pickup_location,
        dropoff_location_dim: dims.dropoff_location,
        payment_type_dim: dims.payment_type,
    })
}

/// Verify that every expected source column is present
fn check_schema(raw: &DataFrame) -> Result<()> {
    for column in EXPECTED_COLUMNS {
        if raw.get_column_index(column).is_none() {
            return Err(EtlError::schema(*column));
        }
    }
    Ok(())
}
