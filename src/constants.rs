//! Application constants for the taxi star-schema ETL
//!
//! This module contains the expected source layout, the fixed categorical
//! lookup tables, and default values used throughout the application.

// =============================================================================
// Source Extract
// =============================================================================

/// Default URL of the public yellow-taxi sample extract
pub const DEFAULT_SOURCE_URL: &str =
    "https://storage.googleapis.com/uber-data-engineering-project/uber_data.csv";

/// Column names the source extract must provide (in any order)
pub const EXPECTED_COLUMNS: &[&str] = &[
    "VendorID",
    "tpep_pickup_datetime",
    "tpep_dropoff_datetime",
    "passenger_count",
    "trip_distance",
    "RatecodeID",
    "store_and_fwd_flag",
    "pickup_longitude",
    "pickup_latitude",
    "dropoff_longitude",
    "dropoff_latitude",
    "payment_type",
    "fare_amount",
    "extra",
    "mta_tax",
    "tip_amount",
    "tolls_amount",
    "improvement_surcharge",
    "total_amount",
];

/// Timestamp columns coerced from text before any reshaping
pub const TIMESTAMP_COLUMNS: &[&str] = &["tpep_pickup_datetime", "tpep_dropoff_datetime"];

/// Accepted timestamp layouts, tried in order
pub const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// =============================================================================
// Categorical Lookup Tables
// =============================================================================

/// TLC rate code ids and their human-readable names
///
/// Codes outside this table are carried through with a null name.
pub const RATE_CODE_NAMES: &[(i64, &str)] = &[
    (1, "Standard rate"),
    (2, "JFK"),
    (3, "Newark"),
    (4, "Nassau or Westchester"),
    (5, "Negotiated fare"),
    (6, "Group ride"),
];

/// TLC payment type ids and their human-readable names
pub const PAYMENT_TYPE_NAMES: &[(i64, &str)] = &[
    (1, "Credit card"),
    (2, "Cash"),
    (3, "No charge"),
    (4, "Dispute"),
    (5, "Unknown"),
    (6, "Voided trip"),
];

// =============================================================================
// Fact Table Layout
// =============================================================================

/// Columns projected into the fact table, in output order
pub const FACT_COLUMNS: &[&str] = &[
    "trip_id",
    "VendorID",
    "datetime_id",
    "passenger_count_id",
    "trip_distance_id",
    "rate_code_id",
    "store_and_fwd_flag",
    "pickup_location_id",
    "dropoff_location_id",
    "payment_type_id",
    "fare_amount",
    "extra",
    "mta_tax",
    "tip_amount",
    "tolls_amount",
    "improvement_surcharge",
    "total_amount",
];
