//! Fact table assembly.
//!
//! Joins every dimension back onto the base table on
//! `trip_id = <dimension>_id` and projects the fact column set. The
//! surrogate ids equal the trip ids, so each join must behave as a
//! row-aligned widening; the resulting row count is checked rather than
//! assumed, since a join over sparse or repeated keys would silently drop
//! or duplicate trips.

use polars::prelude::*;

use super::dedup::TRIP_ID;
use super::dimensions::Dimensions;
use crate::constants::FACT_COLUMNS;
use crate::error::{EtlError, Result};

/// Join the base table with all seven dimensions and project the fact
/// column set, ordered by trip id.
pub fn assemble_fact(base: &DataFrame, dims: &Dimensions) -> Result<DataFrame> {
    let expected = base.height();

    let mut joined = base.clone().lazy();
    for (dimension, id_column) in [
        (&dims.datetime, "datetime_id"),
        (&dims.passenger_count, "passenger_count_id"),
        (&dims.trip_distance, "trip_distance_id"),
        (&dims.rate_code, "rate_code_id"),
        (&dims.pickup_location, "pickup_location_id"),
        (&dims.dropoff_location, "dropoff_location_id"),
        (&dims.payment_type, "payment_type_id"),
    ] {
        // KeepColumns retains the dimension's id column, which the fact
        // table carries as its foreign reference.
        joined = joined.join(
            dimension.clone().lazy(),
            [col(TRIP_ID)],
            [col(id_column)],
            JoinArgs::new(JoinType::Inner).with_coalesce(JoinCoalesce::KeepColumns),
        );
    }

    let projection: Vec<Expr> = FACT_COLUMNS.iter().map(|name| col(*name)).collect();
    let fact = joined
        .select(projection)
        .sort([TRIP_ID], SortMultipleOptions::default())
        .collect()?;

    if fact.height() != expected {
        return Err(EtlError::FactMisaligned {
            expected,
            found: fact.height(),
        });
    }

    Ok(fact)
}
