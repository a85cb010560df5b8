#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dengue case record types and the closed parameter vocabularies shared
//! across the pipeline.
//!
//! A [`CaseRecord`] is one observation as produced by ingestion. The core
//! pipeline only ever reads an immutable snapshot of these records; edits
//! happen upstream and trigger a full re-derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Region value used when a record carries no region information.
pub const UNKNOWN_REGION: &str = "Unknown";

/// One reported case/death observation for a location on a date.
///
/// Counts are exact integer sums-to-be; `deaths <= cases` is expected from
/// real data but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Canonical location name (join key against features and profiles).
    pub location: String,
    /// Region label, `"Unknown"` when the source had none.
    pub region: String,
    /// Reported case count.
    pub cases: u64,
    /// Reported death count.
    pub deaths: u64,
    /// Calendar date of the observation.
    pub date: NaiveDate,
}

/// The metric a map view is colored by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    /// Case counts (normalizable).
    Cases,
    /// Death counts (normalizable).
    Deaths,
    /// Deaths divided by cases. Already a ratio, so it is never normalized.
    Fatality,
}

impl Metric {
    /// Returns `true` for metrics whose values pass through the normalizer.
    ///
    /// Fatality is a ratio of two already-summed quantities; dividing it by
    /// area or population again would be meaningless.
    #[must_use]
    pub const fn is_normalizable(self) -> bool {
        !matches!(self, Self::Fatality)
    }
}

/// Whether statistics are grouped per location or per region.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Grouping {
    /// Per-location grouping (the default map view).
    Location,
    /// Per-region grouping. Region statistics are keyed by the feature's
    /// own region tag, not by the record's region field.
    Region,
}

/// The denominator used to scale raw counts for display.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Normalization {
    /// Divide by the entity's land area in km².
    #[serde(rename = "area_sqkm")]
    #[strum(serialize = "area_sqkm")]
    Area,
    /// Divide by the entity's population.
    Population,
    /// Leave raw counts unchanged.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn normalization_round_trips_legacy_strings() {
        assert_eq!(Normalization::Area.to_string(), "area_sqkm");
        assert_eq!(Normalization::Population.to_string(), "population");
        assert_eq!(Normalization::None.to_string(), "none");
        assert_eq!(
            Normalization::from_str("area_sqkm").unwrap(),
            Normalization::Area
        );
    }

    #[test]
    fn metric_parses_from_str() {
        assert_eq!(Metric::from_str("cases").unwrap(), Metric::Cases);
        assert_eq!(Metric::from_str("fatality").unwrap(), Metric::Fatality);
        assert!(Metric::from_str("bogus").is_err());
    }

    #[test]
    fn fatality_is_not_normalizable() {
        assert!(Metric::Cases.is_normalizable());
        assert!(Metric::Deaths.is_normalizable());
        assert!(!Metric::Fatality.is_normalizable());
    }

    #[test]
    fn grouping_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Grouping::Location).unwrap(),
            "\"location\""
        );
        assert_eq!(
            serde_json::to_string(&Normalization::Area).unwrap(),
            "\"area_sqkm\""
        );
    }
}
