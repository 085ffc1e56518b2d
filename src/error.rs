//! Error handling for the star-schema reshape pipeline.
//!
//! Every error is terminal for the run: nothing is retried or recovered
//! internally, and no partial set of output tables is ever returned.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Retrieval failed for {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Retrieval failed for {url}: HTTP status {status}")]
    RetrievalStatus { url: String, status: u16 },

    #[error("Could not parse response body as delimited text: {reason}")]
    Parse { reason: String },

    #[error("Could not coerce '{value}' to a timestamp in column {column}, row {row}")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Expected column '{column}' is missing from the source table")]
    Schema { column: String },

    #[error("Fact assembly misaligned: expected {expected} rows, join produced {found}")]
    FactMisaligned { expected: usize, found: usize },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl EtlError {
    /// Create a retrieval error for a failed network request
    pub fn retrieval(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Retrieval {
            url: url.into(),
            source,
        }
    }

    /// Create a parse error for a malformed response body
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a coercion error for a value that is not a timestamp
    pub fn coercion(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        Self::TypeCoercion {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Create a schema error for a missing source column
    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
