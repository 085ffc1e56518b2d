//! Exact-duplicate removal and trip id assignment.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Name of the dense surrogate key carried by the base and fact tables
pub const TRIP_ID: &str = "trip_id";

/// Collapse rows that are exact duplicates across all columns, keeping the
/// first occurrence in its original relative order, then assign a dense
/// zero-based `trip_id` in the surviving row order.
pub fn dedup_and_index(base: DataFrame) -> Result<DataFrame> {
    let before = base.height();
    let mut deduped = base.unique_stable(None, UniqueKeepStrategy::First, None)?;

    let removed = before - deduped.height();
    if removed > 0 {
        debug!("Removed {} exact duplicate rows", removed);
    }

    let index = row_index(TRIP_ID, deduped.height());
    deduped.with_column(index)?;
    Ok(deduped)
}

/// Build a dense `[0, n)` surrogate id column
pub fn row_index(name: &str, n: usize) -> Column {
    Column::new(name.into(), (0..n as i64).collect::<Vec<i64>>())
}
