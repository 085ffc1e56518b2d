//! Derivation of the seven dimension tables.
//!
//! Each dimension projects its attributes from the deduplicated base table
//! and carries a surrogate id equal to the row position, which is also the
//! trip id. The dimensions are deliberately row-aligned with the base
//! table rather than normalised on their own content; that mirrors the
//! source system's schema and is what fact assembly relies on.

use chrono::{Datelike, Timelike};
use polars::prelude::*;

use super::dedup::row_index;
use crate::constants::{PAYMENT_TYPE_NAMES, RATE_CODE_NAMES};
use crate::error::Result;

/// The seven dimension tables, row-aligned with the base table
#[derive(Debug, Clone)]
pub struct Dimensions {
    pub datetime: DataFrame,
    pub passenger_count: DataFrame,
    pub trip_distance: DataFrame,
    pub rate_code: DataFrame,
    pub pickup_location: DataFrame,
    pub dropoff_location: DataFrame,
    pub payment_type: DataFrame,
}

/// Derive all seven dimensions from the deduplicated base table.
///
/// The derivations are independent of each other; every one reads only the
/// base table.
pub fn derive_dimensions(base: &DataFrame) -> Result<Dimensions> {
    Ok(Dimensions {
        datetime: datetime_dim(base)?,
        passenger_count: single_column_dim(base, "passenger_count_id", "passenger_count")?,
        trip_distance: single_column_dim(base, "trip_distance_id", "trip_distance")?,
        rate_code: coded_dim(
            base,
            "rate_code_id",
            "RatecodeID",
            "rate_code_name",
            RATE_CODE_NAMES,
        )?,
        pickup_location: location_dim(
            base,
            "pickup_location_id",
            "pickup_latitude",
            "pickup_longitude",
        )?,
        dropoff_location: location_dim(
            base,
            "dropoff_location_id",
            "dropoff_latitude",
            "dropoff_longitude",
        )?,
        payment_type: coded_dim(
            base,
            "payment_type_id",
            "payment_type",
            "payment_type_name",
            PAYMENT_TYPE_NAMES,
        )?,
    })
}

/// Datetime dimension: both timestamps plus hour, day, month, year and
/// weekday for each, where weekday 0 is Monday.
fn datetime_dim(base: &DataFrame) -> Result<DataFrame> {
    let pickup = base.column("tpep_pickup_datetime")?;
    let dropoff = base.column("tpep_dropoff_datetime")?;

    let mut columns = vec![row_index("datetime_id", base.height())];
    columns.push(pickup.clone());
    columns.extend(calendar_parts(pickup, "pick")?);
    columns.push(dropoff.clone());
    columns.extend(calendar_parts(dropoff, "drop")?);

    Ok(DataFrame::new(columns)?)
}

/// Derive the five calendar fields from one datetime column
fn calendar_parts(column: &Column, prefix: &str) -> Result<Vec<Column>> {
    let stamps = column.as_materialized_series().datetime()?;
    let len = stamps.len();

    let mut hours = Vec::with_capacity(len);
    let mut days = Vec::with_capacity(len);
    let mut months = Vec::with_capacity(len);
    let mut years = Vec::with_capacity(len);
    let mut weekdays = Vec::with_capacity(len);

    for value in stamps.as_datetime_iter() {
        hours.push(value.map(|t| t.hour() as i32));
        days.push(value.map(|t| t.day() as i32));
        months.push(value.map(|t| t.month() as i32));
        years.push(value.map(|t| t.year()));
        weekdays.push(value.map(|t| t.weekday().num_days_from_monday() as i32));
    }

    Ok(vec![
        Column::new(format!("{}_hour", prefix).into(), hours),
        Column::new(format!("{}_day", prefix).into(), days),
        Column::new(format!("{}_month", prefix).into(), months),
        Column::new(format!("{}_year", prefix).into(), years),
        Column::new(format!("{}_weekday", prefix).into(), weekdays),
    ])
}

/// Dimension projecting a single attribute column
fn single_column_dim(base: &DataFrame, id_name: &str, attribute: &str) -> Result<DataFrame> {
    let attribute = base.column(attribute)?.clone();
    Ok(DataFrame::new(vec![
        row_index(id_name, base.height()),
        attribute,
    ])?)
}

/// Dimension projecting a latitude/longitude pair
fn location_dim(
    base: &DataFrame,
    id_name: &str,
    latitude: &str,
    longitude: &str,
) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        row_index(id_name, base.height()),
        base.column(latitude)?.clone(),
        base.column(longitude)?.clone(),
    ])?)
}

/// Coded dimension: the raw code column plus a human-readable name from a
/// fixed lookup table. Codes outside the table get a null name, never an
/// error.
fn coded_dim(
    base: &DataFrame,
    id_name: &str,
    code_column: &str,
    name_column: &str,
    table: &'static [(i64, &'static str)],
) -> Result<DataFrame> {
    let codes = base.column(code_column)?;
    let cast = codes.cast(&DataType::Int64)?;
    let ids = cast.as_materialized_series().i64()?;

    let names: Vec<Option<&str>> = ids
        .into_iter()
        .map(|code| code.and_then(|c| lookup(table, c)))
        .collect();

    Ok(DataFrame::new(vec![
        row_index(id_name, base.height()),
        codes.clone(),
        Column::new(name_column.into(), names),
    ])?)
}

fn lookup(table: &'static [(i64, &'static str)], code: i64) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}
