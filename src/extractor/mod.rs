//! Source extraction: fetch the delimited trip extract over HTTP and
//! parse it into a typed in-memory table.
//!
//! This is the leaf stage of the pipeline. It applies no filtering or
//! validation; row order in the returned table matches row order in the
//! response body, and the transformer depends only on the column names.

use std::io::Cursor;

use polars::prelude::*;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{EtlError, Result};

/// Number of leading rows examined when inferring per-column types
const SCHEMA_INFERENCE_ROWS: usize = 100;

/// Fetches the raw trip extract from a remote source
#[derive(Debug)]
pub struct Extractor {
    client: Client,
}

impl Extractor {
    /// Create an extractor with a fresh blocking HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("taxi-star/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(EtlError::ClientInit)?;
        Ok(Self { client })
    }

    /// Perform a blocking GET against `url` and parse the body as CSV
    ///
    /// Fails with a retrieval error if the request does not succeed or the
    /// server answers with a non-success status, and with a parse error if
    /// the body is not well-formed delimited text.
    pub fn fetch(&self, url: &str) -> Result<DataFrame> {
        info!("Fetching source extract from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EtlError::retrieval(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EtlError::RetrievalStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| EtlError::retrieval(url, e))?;
        let table = parse_records(&body)?;
        debug!(
            "Parsed extract: {} rows x {} columns",
            table.height(),
            table.width()
        );

        Ok(table)
    }
}

/// Parse comma-separated text with a header row into a table
///
/// Column types are inferred from content; the timestamp columns stay as
/// text until the transformer coerces them.
pub fn parse_records(body: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(SCHEMA_INFERENCE_ROWS))
        .into_reader_with_file_handle(Cursor::new(body.as_bytes()))
        .finish()
        .map_err(|e| EtlError::parse(e.to_string()))
}
