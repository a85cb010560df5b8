#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV case record source.
//!
//! Reads the DOH-style dengue export (`loc,cases,deaths,date,Region`) into
//! [`CaseRecord`]s with lenient coercion: non-numeric counts become 0, a
//! missing region becomes `"Unknown"`, and rows with unparseable dates are
//! skipped with a `log::warn!`. The core pipeline never re-validates these
//! fields.

pub mod parsing;

use std::io::Read;
use std::path::Path;

use dengue_map_case_models::{CaseRecord, UNKNOWN_REGION};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while reading a record file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw CSV row before coercion. Header names match the source export.
#[derive(Debug, Deserialize)]
struct RawRow {
    loc: String,
    cases: Option<String>,
    deaths: Option<String>,
    date: Option<String>,
    #[serde(rename = "Region")]
    region: Option<String>,
}

/// Reads case records from a CSV file on disk.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be opened or a row is not
/// valid CSV. Field-level problems are coerced, not errored.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<CaseRecord>, IngestError> {
    let file = std::fs::File::open(path)?;
    parse_records(file)
}

/// Parses case records from any CSV reader.
///
/// # Errors
///
/// Returns [`IngestError`] if a row is not valid CSV.
pub fn parse_records(reader: impl Read) -> Result<Vec<CaseRecord>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize() {
        let row: RawRow = row?;
        let Some(date) = row.date.as_deref().and_then(parsing::parse_record_date) else {
            log::warn!(
                "Skipping record for \"{}\": unparseable date {:?}",
                row.loc,
                row.date
            );
            continue;
        };

        records.push(CaseRecord {
            location: row.loc,
            cases: parsing::coerce_count(row.cases.as_deref()),
            deaths: parsing::coerce_count(row.deaths.as_deref()),
            date,
            region: row
                .region
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_REGION.to_string()),
        });
    }

    Ok(records)
}
