#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic lookup tables and count normalization.
//!
//! [`GeoProfiles`] is the process-wide immutable table set: per-location and
//! per-region denominators (area, population), the feature-name to canonical
//! location mapping, and the region-code to region-label mapping. It is built
//! once at startup and only read afterwards.
//!
//! Normalization is fail-soft: a missing or non-positive denominator falls
//! back to the raw value with a `log::warn!` diagnostic, never an error.

pub mod profiles;
pub mod text;

pub use profiles::GeoProfiles;
pub use text::{suffix_text, to_title_case};

use thiserror::Error;

/// Errors that can occur while loading the lookup tables.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Reading the table file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
