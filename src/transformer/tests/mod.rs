//! Tests for the transformer pipeline
//!
//! Shared fixtures and column helpers live here; per-step tests are in
//! their own modules.

pub mod coerce_tests;

use polars::prelude::*;

use crate::transformer::{coerce, dedup};

/// Three-row extract where the second row is an exact duplicate of the
/// first. 2016-03-07 is a Monday; the third row straddles midnight from a
/// Saturday into a Sunday.
pub fn sample_raw_table() -> DataFrame {
    df!(
        "VendorID" => [1i64, 1, 2],
        "tpep_pickup_datetime" => [
            "2016-03-07 11:05:00",
            "2016-03-07 11:05:00",
            "2016-03-12 23:59:58"
        ],
        "tpep_dropoff_datetime" => [
            "2016-03-07 11:25:30",
            "2016-03-07 11:25:30",
            "2016-03-13 00:10:00"
        ],
        "passenger_count" => [1i64, 1, 3],
        "trip_distance" => [2.5f64, 2.5, 7.1],
        "RatecodeID" => [1i64, 1, 2],
        "store_and_fwd_flag" => ["N", "N", "Y"],
        "pickup_longitude" => [-73.97f64, -73.97, -73.87],
        "pickup_latitude" => [40.76f64, 40.76, 40.77],
        "dropoff_longitude" => [-73.98f64, -73.98, -73.95],
        "dropoff_latitude" => [40.75f64, 40.75, 40.78],
        "payment_type" => [1i64, 1, 2],
        "fare_amount" => [12.5f64, 12.5, 28.0],
        "extra" => [0.5f64, 0.5, 0.0],
        "mta_tax" => [0.5f64, 0.5, 0.5],
        "tip_amount" => [2.0f64, 2.0, 0.0],
        "tolls_amount" => [0.0f64, 0.0, 5.54],
        "improvement_surcharge" => [0.3f64, 0.3, 0.3],
        "total_amount" => [15.8f64, 15.8, 34.34]
    )
    .unwrap()
}

/// Seven distinct rows exercising every lookup code plus one unmapped
/// code (99) for both coded dimensions.
pub fn coded_rows_table() -> DataFrame {
    let pickups: Vec<String> = (1..=7)
        .map(|day| format!("2016-03-{:02} 10:00:00", day))
        .collect();
    let dropoffs: Vec<String> = (1..=7)
        .map(|day| format!("2016-03-{:02} 11:00:00", day))
        .collect();
    let codes = [1i64, 2, 3, 4, 5, 6, 99];

    df!(
        "VendorID" => [1i64; 7],
        "tpep_pickup_datetime" => pickups,
        "tpep_dropoff_datetime" => dropoffs,
        "passenger_count" => [1i64; 7],
        "trip_distance" => [1.0f64; 7],
        "RatecodeID" => codes,
        "store_and_fwd_flag" => ["N"; 7],
        "pickup_longitude" => [-73.97f64; 7],
        "pickup_latitude" => [40.76f64; 7],
        "dropoff_longitude" => [-73.98f64; 7],
        "dropoff_latitude" => [40.75f64; 7],
        "payment_type" => codes,
        "fare_amount" => [10.0f64; 7],
        "extra" => [0.0f64; 7],
        "mta_tax" => [0.5f64; 7],
        "tip_amount" => [1.0f64; 7],
        "tolls_amount" => [0.0f64; 7],
        "improvement_surcharge" => [0.3f64; 7],
        "total_amount" => [11.8f64; 7]
    )
    .unwrap()
}

/// Coerce and deduplicate a raw fixture into a base table with trip ids
pub fn deduped_base_from(raw: DataFrame) -> DataFrame {
    let mut base = raw;
    coerce::coerce_timestamps(&mut base).unwrap();
    dedup::dedup_and_index(base).unwrap()
}

/// The standard deduplicated base table (two trips)
pub fn deduped_base() -> DataFrame {
    deduped_base_from(sample_raw_table())
}

pub fn i64_values(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

pub fn i32_values(df: &DataFrame, name: &str) -> Vec<i32> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

pub fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

pub fn str_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}
