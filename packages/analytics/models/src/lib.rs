#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregated case statistics types.
//!
//! These are the derived shapes the pipeline produces from a record
//! snapshot: raw per-location totals, per-location rate insights, and the
//! dataset-wide summary consumed by the stat display boundary.

use serde::{Deserialize, Serialize};

/// Raw case/death sums for one location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTotals {
    /// Sum of reported cases.
    pub total_cases: u64,
    /// Sum of reported deaths.
    pub total_deaths: u64,
}

/// Totals for one location together with its derived rates.
///
/// Both rates are defined as 0 when `total_cases` is 0 so that downstream
/// sorting and classification never see NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAggregate {
    /// Canonical location name.
    pub location: String,
    /// Sum of reported cases.
    pub total_cases: u64,
    /// Sum of reported deaths.
    pub total_deaths: u64,
    /// `total_deaths / total_cases`, 0 when there are no cases.
    pub mortality_rate: f64,
    /// Case-fatality ratio: mortality rate as a percentage, rounded to two
    /// decimals.
    pub cfr: f64,
}

/// One extremum entry: the location holding the highest or lowest value of a
/// rate metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateExtremum {
    /// Canonical location name.
    pub location: String,
    /// The rate value at this extremum.
    pub value: f64,
}

/// Dataset-wide summary for the stat display boundary.
///
/// The extrema are `None` when the dataset has no locations; the display
/// layer renders that as "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    /// Sum of cases over all records.
    pub total_cases: u64,
    /// Sum of deaths over all records.
    pub total_deaths: u64,
    /// Number of distinct locations in the dataset.
    pub total_locations: u64,
    /// Location with the highest mortality rate.
    pub highest_mortality: Option<RateExtremum>,
    /// Location with the lowest mortality rate.
    pub lowest_mortality: Option<RateExtremum>,
    /// Location with the highest case-fatality ratio.
    pub highest_cfr: Option<RateExtremum>,
    /// Location with the lowest case-fatality ratio.
    pub lowest_cfr: Option<RateExtremum>,
}
