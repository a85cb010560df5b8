//! Joins aggregated statistics onto GeoJSON features.

use std::collections::BTreeMap;

use dengue_map_analytics_models::LocationTotals;
use dengue_map_case_models::{Grouping, Metric, Normalization};
use dengue_map_geography::GeoProfiles;
use geojson::{Feature, FeatureCollection};
use serde_json::Value;

/// Parameters of one map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Metric the map is colored by.
    pub metric: Metric,
    /// Location-mode or region-mode statistics.
    pub group_by: Grouping,
    /// Active denominator for count scaling.
    pub normalization: Normalization,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            metric: Metric::Cases,
            group_by: Grouping::Location,
            normalization: Normalization::Area,
        }
    }
}

/// Joins per-location totals onto every feature of the collection.
///
/// Each output feature carries `cases`, `deaths`, and `fatality` properties.
/// Features with no matching totals get zeros and are kept, so the map
/// renders every polygon. The input collection is never mutated; calling
/// this twice with identical inputs produces identical output.
///
/// The fatality ratio is always computed from the raw totals, and when the
/// selected metric is fatality the counts skip normalization entirely.
/// In region mode the normalization entity is the feature's own `region`
/// tag, not the record's region field.
#[must_use]
pub fn enrich(
    features: &FeatureCollection,
    totals: &BTreeMap<String, LocationTotals>,
    profiles: &GeoProfiles,
    options: &EnrichOptions,
) -> FeatureCollection {
    FeatureCollection {
        bbox: features.bbox.clone(),
        features: features
            .features
            .iter()
            .map(|feature| enrich_feature(feature, totals, profiles, options))
            .collect(),
        foreign_members: features.foreign_members.clone(),
    }
}

/// Extracts the metric value of every feature, for breakpoint computation.
///
/// Missing or non-numeric properties read as 0 so a partially enriched
/// collection still classifies.
#[must_use]
pub fn metric_values(features: &FeatureCollection, metric: Metric) -> Vec<f64> {
    features
        .features
        .iter()
        .map(|feature| property_f64(feature, metric.as_ref()).unwrap_or(0.0))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn enrich_feature(
    feature: &Feature,
    totals: &BTreeMap<String, LocationTotals>,
    profiles: &GeoProfiles,
    options: &EnrichOptions,
) -> Feature {
    let name = property_str(feature, "name").unwrap_or_default().to_string();
    let canonical = profiles
        .canonical_location(&name)
        .unwrap_or(&name)
        .to_string();

    let mut cases = 0.0;
    let mut deaths = 0.0;
    let mut fatality = 0.0;

    if let Some(t) = totals.get(&canonical) {
        cases = t.total_cases as f64;
        deaths = t.total_deaths as f64;
        fatality = if t.total_cases > 0 {
            deaths / cases
        } else {
            0.0
        };

        if options.metric.is_normalizable() {
            let entity_name = match options.group_by {
                Grouping::Location => canonical.clone(),
                Grouping::Region => property_str(feature, "region")
                    .unwrap_or_default()
                    .to_string(),
            };
            cases =
                profiles.normalize(&entity_name, Some(cases), options.normalization, options.group_by);
            deaths =
                profiles.normalize(&entity_name, Some(deaths), options.normalization, options.group_by);
        }
    }

    let mut enriched = feature.clone();
    enriched.set_property("cases", cases);
    enriched.set_property("deaths", deaths);
    enriched.set_property("fatality", fatality);
    enriched
}

pub(crate) fn property_str<'a>(feature: &'a Feature, key: &str) -> Option<&'a str> {
    feature.property(key).and_then(Value::as_str)
}

pub(crate) fn property_f64(feature: &Feature, key: &str) -> Option<f64> {
    feature.property(key).and_then(Value::as_f64)
}
