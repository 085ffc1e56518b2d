//! Tests for timestamp coercion

use polars::prelude::*;

use super::sample_raw_table;
use crate::error::EtlError;
use crate::transformer::coerce::coerce_timestamps;

#[test]
fn test_timestamps_become_datetime() {
    let mut base = sample_raw_table();
    coerce_timestamps(&mut base).unwrap();

    for column in ["tpep_pickup_datetime", "tpep_dropoff_datetime"] {
        let dtype = base.column(column).unwrap().dtype().clone();
        assert!(
            matches!(dtype, DataType::Datetime(_, _)),
            "{} stayed {:?}",
            column,
            dtype
        );
    }
}

#[test]
fn test_iso_layout_accepted() {
    let mut base = sample_raw_table();
    base.with_column(Column::new(
        "tpep_pickup_datetime".into(),
        [
            "2016-03-07T11:05:00",
            "2016-03-07T11:05:00",
            "2016-03-12T23:59:58",
        ],
    ))
    .unwrap();

    assert!(coerce_timestamps(&mut base).is_ok());
}

#[test]
fn test_unparseable_timestamp_aborts() {
    let mut base = sample_raw_table();
    base.with_column(Column::new(
        "tpep_pickup_datetime".into(),
        ["2016-03-07 11:05:00", "not-a-timestamp", "2016-03-12 23:59:58"],
    ))
    .unwrap();

    let result = coerce_timestamps(&mut base);
    match result {
        Err(EtlError::TypeCoercion { column, row, value }) => {
            assert_eq!(column, "tpep_pickup_datetime");
            assert_eq!(row, 1);
            assert_eq!(value, "not-a-timestamp");
        }
        other => panic!("expected TypeCoercion, got {:?}", other),
    }
}

#[test]
fn test_null_timestamp_aborts() {
    let mut base = sample_raw_table();
    base.with_column(Column::new(
        "tpep_dropoff_datetime".into(),
        vec![
            Some("2016-03-07 11:25:30"),
            None,
            Some("2016-03-13 00:10:00"),
        ],
    ))
    .unwrap();

    let result = coerce_timestamps(&mut base);
    assert!(matches!(result, Err(EtlError::TypeCoercion { .. })));
}

#[test]
fn test_coercion_is_idempotent() {
    let mut base = sample_raw_table();
    coerce_timestamps(&mut base).unwrap();
    let first = base.clone();

    // Coercing an already coerced table is a no-op
    coerce_timestamps(&mut base).unwrap();
    assert!(base.equals(&first));
}
