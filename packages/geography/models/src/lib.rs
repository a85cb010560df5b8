#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Profile and name-mapping payload types for the geographic lookup tables.
//!
//! These mirror the JSON documents the tables are loaded from. Field names
//! are kept as they appear on disk (`area_sqkm`, not camelCase) so the files
//! deserialize without renames.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-location metadata: denominators for normalization plus the region the
/// location belongs to (display only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Land area in square kilometers.
    pub area_sqkm: Option<f64>,
    /// Resident population.
    pub population: Option<u64>,
    /// Region label for tooltip display.
    pub region: Option<String>,
}

/// Per-region denominators for region-mode normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Land area in square kilometers.
    pub area_sqkm: Option<f64>,
    /// Resident population.
    pub population: Option<u64>,
}

/// The full set of lookup tables as loaded from disk.
///
/// Every table is optional in the document; absent tables deserialize to
/// empty maps so a partial file still produces a usable (fallback-heavy)
/// table set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoTables {
    /// Canonical location name -> profile.
    #[serde(default)]
    pub locations: BTreeMap<String, LocationProfile>,
    /// Canonical region label -> profile.
    #[serde(default)]
    pub regions: BTreeMap<String, RegionProfile>,
    /// Geographic feature name -> canonical location name.
    #[serde(default)]
    pub location_mapping: BTreeMap<String, String>,
    /// Region code (as tagged on features) -> canonical region label.
    #[serde(default)]
    pub region_mapping: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_defaults_to_empty_tables() {
        let tables: GeoTables = serde_json::from_str("{}").unwrap();
        assert!(tables.locations.is_empty());
        assert!(tables.region_mapping.is_empty());
    }

    #[test]
    fn deserializes_disk_field_names() {
        let json = r#"{
            "locations": {
                "pateros": { "area_sqkm": 10.0, "population": 50000, "region": "ncr" }
            },
            "location_mapping": { "Pateros City": "pateros" }
        }"#;
        let tables: GeoTables = serde_json::from_str(json).unwrap();
        let profile = &tables.locations["pateros"];
        assert_eq!(profile.area_sqkm, Some(10.0));
        assert_eq!(profile.population, Some(50_000));
        assert_eq!(tables.location_mapping["Pateros City"], "pateros");
    }
}
