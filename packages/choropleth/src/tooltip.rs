//! Tooltip text for interactive feature display.

use dengue_map_case_models::Grouping;
use dengue_map_geography::text::group_thousands;
use dengue_map_geography::{GeoProfiles, suffix_text, to_title_case};
use geojson::Feature;

use crate::enrich::{EnrichOptions, property_f64, property_str};

const NO_DATA: &str = "Data not available";

/// Builds the tooltip lines for one enriched feature.
///
/// Expects the feature to already carry `cases`, `deaths`, and `fatality`
/// properties from [`crate::enrich`]; missing properties read as 0 so a
/// bare feature still produces a complete tooltip.
#[must_use]
pub fn tooltip_lines(
    feature: &Feature,
    profiles: &GeoProfiles,
    options: &EnrichOptions,
) -> Vec<String> {
    let name = property_str(feature, "name").unwrap_or_default();
    let location = profiles.canonical_location(name).unwrap_or(name);
    let profile = profiles.location_profile(location);

    let header = match options.group_by {
        Grouping::Location => format!("Location: {location}"),
        Grouping::Region => {
            let label = property_str(feature, "region").map_or_else(
                || "Unknown Region".to_string(),
                |code| to_title_case(profiles.region_label(code).unwrap_or(code)),
            );
            format!("Region: {label}")
        }
    };

    let cases = property_f64(feature, "cases").unwrap_or(0.0);
    let deaths = property_f64(feature, "deaths").unwrap_or(0.0);
    let fatality = property_f64(feature, "fatality").unwrap_or(0.0);
    let suffix = suffix_text(options.normalization, options.metric);

    let population = profile
        .and_then(|p| p.population)
        .map_or_else(|| NO_DATA.to_string(), group_thousands);
    let area = profile.and_then(|p| p.area_sqkm).map_or_else(
        || NO_DATA.to_string(),
        |a| format!("{} km\u{b2}", format_quantity(a)),
    );
    let region = profile
        .and_then(|p| p.region.as_deref())
        .map_or_else(|| NO_DATA.to_string(), to_title_case);

    vec![
        header,
        format!("Cases: {cases:.2}{suffix}"),
        format!("Deaths: {deaths:.2}{suffix}"),
        format!("Fatality Rate: {:.2}%", fatality * 100.0),
        format!("Population: {population}"),
        format!("Area: {area}"),
        format!("Region: {region}"),
    ]
}

/// Formats a quantity with thousands grouping when integral.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_quantity(value: f64) -> String {
    if value >= 0.0 && value.fract() == 0.0 {
        group_thousands(value as u64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dengue_map_case_models::{Metric, Normalization};
    use dengue_map_geography_models::GeoTables;
    use serde_json::json;

    fn sample_profiles() -> GeoProfiles {
        let tables: GeoTables = serde_json::from_value(json!({
            "locations": {
                "pateros": {
                    "area_sqkm": 10.0,
                    "population": 50000,
                    "region": "national capital region"
                }
            },
            "location_mapping": { "pateros city": "Pateros" },
            "region_mapping": { "ncr": "national capital region" }
        }))
        .unwrap();
        GeoProfiles::from_tables(tables)
    }

    fn enriched_feature() -> Feature {
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: json!({
                "name": "Pateros City",
                "region": "ncr",
                "cases": 10.0,
                "deaths": 0.5,
                "fatality": 0.05
            })
            .as_object()
            .cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn location_mode_tooltip_lines() {
        let lines = tooltip_lines(
            &enriched_feature(),
            &sample_profiles(),
            &EnrichOptions::default(),
        );
        assert_eq!(lines[0], "Location: Pateros");
        assert_eq!(lines[1], "Cases: 10.00 per km²");
        assert_eq!(lines[2], "Deaths: 0.50 per km²");
        assert_eq!(lines[3], "Fatality Rate: 5.00%");
        assert_eq!(lines[4], "Population: 50,000");
        assert_eq!(lines[5], "Area: 10 km²");
        assert_eq!(lines[6], "Region: National Capital Region");
    }

    #[test]
    fn region_mode_uses_the_mapped_region_label() {
        let options = EnrichOptions {
            group_by: Grouping::Region,
            ..EnrichOptions::default()
        };
        let lines = tooltip_lines(&enriched_feature(), &sample_profiles(), &options);
        assert_eq!(lines[0], "Region: National Capital Region");
    }

    #[test]
    fn fatality_metric_switches_suffix_to_percent() {
        let options = EnrichOptions {
            metric: Metric::Fatality,
            normalization: Normalization::None,
            ..EnrichOptions::default()
        };
        let lines = tooltip_lines(&enriched_feature(), &sample_profiles(), &options);
        assert_eq!(lines[1], "Cases: 10.00%");
    }

    #[test]
    fn unknown_feature_reports_missing_profile_data() {
        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: json!({ "name": "Atlantis" }).as_object().cloned(),
            foreign_members: None,
        };
        let lines = tooltip_lines(&feature, &sample_profiles(), &EnrichOptions::default());
        assert_eq!(lines[0], "Location: Atlantis");
        assert_eq!(lines[1], "Cases: 0.00 per km²");
        assert_eq!(lines[4], "Population: Data not available");
        assert_eq!(lines[5], "Area: Data not available");
        assert_eq!(lines[6], "Region: Data not available");
    }

    #[test]
    fn region_mode_without_region_tag_is_unknown() {
        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: json!({ "name": "Atlantis" }).as_object().cloned(),
            foreign_members: None,
        };
        let options = EnrichOptions {
            group_by: Grouping::Region,
            ..EnrichOptions::default()
        };
        let lines = tooltip_lines(&feature, &sample_profiles(), &options);
        assert_eq!(lines[0], "Region: Unknown Region");
    }
}
