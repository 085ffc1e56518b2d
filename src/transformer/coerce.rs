//! Timestamp coercion for the raw extract.
//!
//! The pickup and dropoff columns arrive as text and must become a proper
//! datetime type before deduplication and dimension derivation. Any value
//! that fails to parse aborts the whole run; no partially coerced table is
//! ever returned.

use chrono::NaiveDateTime;
use polars::prelude::*;

use crate::constants::{TIMESTAMP_COLUMNS, TIMESTAMP_FORMATS};
use crate::error::{EtlError, Result};

/// Coerce both timestamp columns in place
pub fn coerce_timestamps(base: &mut DataFrame) -> Result<()> {
    for column in TIMESTAMP_COLUMNS {
        let coerced = coerce_column(base, column)?;
        base.with_column(coerced)?;
    }
    Ok(())
}

/// Parse one text column into a millisecond datetime series
fn coerce_column(base: &DataFrame, column: &str) -> Result<Series> {
    let series = base.column(column)?.as_materialized_series();

    // Already coerced tables pass through unchanged, which keeps reshape
    // idempotent over its own output shape.
    if matches!(series.dtype(), DataType::Datetime(_, _)) {
        return Ok(series.clone());
    }

    let text = match series.dtype() {
        DataType::String => series.str()?,
        other => {
            return Err(EtlError::coercion(column, 0, format!("<{} column>", other)));
        }
    };

    let mut stamps = Vec::with_capacity(text.len());
    for (row, value) in text.into_iter().enumerate() {
        let raw = value.ok_or_else(|| EtlError::coercion(column, row, "<null>"))?;
        let parsed =
            parse_timestamp(raw).ok_or_else(|| EtlError::coercion(column, row, raw))?;
        stamps.push(parsed.and_utc().timestamp_millis());
    }

    Ok(Int64Chunked::from_vec(column.into(), stamps)
        .into_datetime(TimeUnit::Milliseconds, None)
        .into_series())
}

/// Try each accepted layout in order
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw.trim(), format).ok())
}
