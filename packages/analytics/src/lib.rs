#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Case aggregation over an immutable record snapshot.
//!
//! The pipeline is stateless and idempotent: every dataset or parameter
//! change triggers a full re-derivation from the current snapshot. The
//! total-sum fold is kept separate from the rate derivation so the same
//! totals feed both the per-location insights and the global summary.

use std::collections::{BTreeMap, BTreeSet};

use dengue_map_analytics_models::{CaseSummary, LocationAggregate, LocationTotals, RateExtremum};
use dengue_map_case_models::CaseRecord;

/// Folds the record snapshot into per-location case/death totals.
///
/// Grouping is by exact location string; canonicalization happens upstream.
#[must_use]
pub fn aggregate(records: &[CaseRecord]) -> BTreeMap<String, LocationTotals> {
    let mut totals: BTreeMap<String, LocationTotals> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.location.clone()).or_default();
        entry.total_cases += record.cases;
        entry.total_deaths += record.deaths;
    }
    totals
}

/// Second pass over the totals: derives mortality rate and CFR per location.
///
/// A location with zero cases gets a mortality rate and CFR of 0, never NaN,
/// so downstream sorting and classification stay well-defined.
#[must_use]
pub fn location_insights(totals: &BTreeMap<String, LocationTotals>) -> Vec<LocationAggregate> {
    totals
        .iter()
        .map(|(location, t)| {
            let mortality_rate = mortality_rate(t.total_deaths, t.total_cases);
            LocationAggregate {
                location: location.clone(),
                total_cases: t.total_cases,
                total_deaths: t.total_deaths,
                mortality_rate,
                cfr: round2(mortality_rate * 100.0),
            }
        })
        .collect()
}

/// Builds the dataset-wide summary: global totals, distinct-location count,
/// and the four rate extrema.
///
/// Each extremum pair comes from one stable descending sort: the highest is
/// the first element, the lowest is the last element of the same sort. Ties
/// keep the insight list's order.
#[must_use]
pub fn summarize(records: &[CaseRecord], insights: &[LocationAggregate]) -> CaseSummary {
    let total_cases = records.iter().map(|r| r.cases).sum();
    let total_deaths = records.iter().map(|r| r.deaths).sum();
    let total_locations = records
        .iter()
        .map(|r| r.location.as_str())
        .collect::<BTreeSet<_>>()
        .len() as u64;

    let by_mortality = sorted_descending(insights, |a| a.mortality_rate);
    let by_cfr = sorted_descending(insights, |a| a.cfr);

    CaseSummary {
        total_cases,
        total_deaths,
        total_locations,
        highest_mortality: extremum(by_mortality.first(), |a| a.mortality_rate),
        lowest_mortality: extremum(by_mortality.last(), |a| a.mortality_rate),
        highest_cfr: extremum(by_cfr.first(), |a| a.cfr),
        lowest_cfr: extremum(by_cfr.last(), |a| a.cfr),
    }
}

/// `deaths / cases`, defined as 0 when there are no cases.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mortality_rate(deaths: u64, cases: u64) -> f64 {
    if cases == 0 {
        0.0
    } else {
        deaths as f64 / cases as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sorted_descending(
    insights: &[LocationAggregate],
    key: impl Fn(&LocationAggregate) -> f64,
) -> Vec<&LocationAggregate> {
    let mut sorted: Vec<&LocationAggregate> = insights.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted
}

fn extremum(
    aggregate: Option<&&LocationAggregate>,
    key: impl Fn(&LocationAggregate) -> f64,
) -> Option<RateExtremum> {
    aggregate.map(|a| RateExtremum {
        location: a.location.clone(),
        value: key(a),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(location: &str, cases: u64, deaths: u64) -> CaseRecord {
        CaseRecord {
            location: location.to_string(),
            region: "Unknown".to_string(),
            cases,
            deaths,
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        }
    }

    #[test]
    fn aggregates_totals_per_location() {
        let records = vec![
            record("Pateros", 100, 5),
            record("Pateros", 50, 1),
            record("Taguig", 30, 0),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Pateros"].total_cases, 150);
        assert_eq!(totals["Pateros"].total_deaths, 6);
        assert_eq!(totals["Taguig"].total_cases, 30);
    }

    #[test]
    fn empty_snapshot_yields_empty_totals() {
        let totals = aggregate(&[]);
        assert!(totals.is_empty());
        assert!(location_insights(&totals).is_empty());
    }

    #[test]
    fn derives_mortality_and_cfr() {
        let totals = aggregate(&[record("Pateros", 100, 5)]);
        let insights = location_insights(&totals);
        assert_eq!(insights.len(), 1);
        assert!((insights[0].mortality_rate - 0.05).abs() < f64::EPSILON);
        assert!((insights[0].cfr - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cfr_rounds_to_two_decimals() {
        let totals = aggregate(&[record("Taguig", 3, 1)]);
        let insights = location_insights(&totals);
        assert!((insights[0].cfr - 33.33).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_cases_yield_zero_rates() {
        let totals = aggregate(&[record("Empty", 0, 0)]);
        let insights = location_insights(&totals);
        assert!(insights[0].mortality_rate.abs() < f64::EPSILON);
        assert!(insights[0].cfr.abs() < f64::EPSILON);
    }

    #[test]
    fn summarizes_global_totals() {
        let records = vec![
            record("Pateros", 100, 5),
            record("Pateros", 50, 1),
            record("Taguig", 30, 0),
        ];
        let totals = aggregate(&records);
        let insights = location_insights(&totals);
        let summary = summarize(&records, &insights);
        assert_eq!(summary.total_cases, 180);
        assert_eq!(summary.total_deaths, 6);
        assert_eq!(summary.total_locations, 2);
    }

    #[test]
    fn extrema_come_from_one_descending_sort() {
        let records = vec![
            record("High", 100, 50),
            record("Mid", 100, 10),
            record("Low", 100, 1),
        ];
        let totals = aggregate(&records);
        let insights = location_insights(&totals);
        let summary = summarize(&records, &insights);

        let highest = summary.highest_mortality.unwrap();
        assert_eq!(highest.location, "High");
        assert!((highest.value - 0.5).abs() < f64::EPSILON);

        let lowest = summary.lowest_mortality.unwrap();
        assert_eq!(lowest.location, "Low");
        assert!((lowest.value - 0.01).abs() < f64::EPSILON);

        assert_eq!(summary.highest_cfr.unwrap().location, "High");
        assert_eq!(summary.lowest_cfr.unwrap().location, "Low");
    }

    #[test]
    fn tied_lowest_is_last_of_the_stable_sort() {
        // Two locations tie at the bottom; the stable descending sort keeps
        // insight order among equals, so "lowest" is the later of the two.
        let records = vec![
            record("Alpha", 100, 1),
            record("Beta", 100, 1),
            record("Gamma", 100, 20),
        ];
        let totals = aggregate(&records);
        let insights = location_insights(&totals);
        let summary = summarize(&records, &insights);
        assert_eq!(summary.highest_mortality.unwrap().location, "Gamma");
        assert_eq!(summary.lowest_mortality.unwrap().location, "Beta");
    }

    #[test]
    fn empty_dataset_reports_absent_extrema() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_cases, 0);
        assert_eq!(summary.total_deaths, 0);
        assert_eq!(summary.total_locations, 0);
        assert!(summary.highest_mortality.is_none());
        assert!(summary.lowest_mortality.is_none());
        assert!(summary.highest_cfr.is_none());
        assert!(summary.lowest_cfr.is_none());
    }
}
