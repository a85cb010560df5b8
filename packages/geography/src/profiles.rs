//! The immutable lookup table set and the normalizer built on it.

use std::collections::BTreeMap;
use std::path::Path;

use dengue_map_case_models::{Grouping, Normalization};
use dengue_map_geography_models::{GeoTables, LocationProfile, RegionProfile};

use crate::GeoError;

/// Process-wide geographic lookup tables.
///
/// All keys are case-folded at construction time and every lookup case-folds
/// its query, so `"Pateros"` and `"pateros"` resolve identically. The set is
/// never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct GeoProfiles {
    locations: BTreeMap<String, LocationProfile>,
    regions: BTreeMap<String, RegionProfile>,
    location_mapping: BTreeMap<String, String>,
    region_mapping: BTreeMap<String, String>,
}

impl GeoProfiles {
    /// Builds the table set from deserialized table payloads, case-folding
    /// all keys.
    #[must_use]
    pub fn from_tables(tables: GeoTables) -> Self {
        Self {
            locations: fold_keys(tables.locations),
            regions: fold_keys(tables.regions),
            location_mapping: fold_keys(tables.location_mapping),
            region_mapping: fold_keys(tables.region_mapping),
        }
    }

    /// Loads the table set from a JSON document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeoError> {
        let text = std::fs::read_to_string(path)?;
        let tables: GeoTables = serde_json::from_str(&text)?;
        Ok(Self::from_tables(tables))
    }

    /// Resolves a geographic feature name to its canonical location name.
    ///
    /// Returns `None` when the feature name has no mapping entry; callers
    /// fall back to the feature's own name string.
    #[must_use]
    pub fn canonical_location(&self, feature_name: &str) -> Option<&str> {
        self.location_mapping
            .get(&feature_name.to_lowercase())
            .map(String::as_str)
    }

    /// Resolves a region code (as tagged on features) to its canonical
    /// region label.
    #[must_use]
    pub fn region_label(&self, region_code: &str) -> Option<&str> {
        self.region_mapping
            .get(&region_code.to_lowercase())
            .map(String::as_str)
    }

    /// Returns the profile for a canonical location, if known.
    #[must_use]
    pub fn location_profile(&self, location: &str) -> Option<&LocationProfile> {
        self.locations.get(&location.to_lowercase())
    }

    /// Returns the land area in km² for a location or region.
    #[must_use]
    pub fn area_sqkm(&self, entity: Grouping, name: &str) -> Option<f64> {
        match entity {
            Grouping::Location => self.location_profile(name)?.area_sqkm,
            Grouping::Region => self.regions.get(&name.to_lowercase())?.area_sqkm,
        }
    }

    /// Returns the population for a location or region.
    #[must_use]
    pub fn population(&self, entity: Grouping, name: &str) -> Option<u64> {
        match entity {
            Grouping::Location => self.location_profile(name)?.population,
            Grouping::Region => self.regions.get(&name.to_lowercase())?.population,
        }
    }

    /// Scales a raw count by the selected denominator for the named entity.
    ///
    /// Fail-soft contract:
    /// * empty `name` or `None` value -> 0 (the "no data" case);
    /// * [`Normalization::None`] -> the raw value unchanged;
    /// * missing or non-positive denominator -> the raw value, with a
    ///   `log::warn!` diagnostic. The pipeline never aborts here.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normalize(
        &self,
        name: &str,
        value: Option<f64>,
        denominator: Normalization,
        entity: Grouping,
    ) -> f64 {
        let Some(value) = value else {
            return 0.0;
        };
        if name.trim().is_empty() {
            return 0.0;
        }

        let denom = match denominator {
            Normalization::None => return value,
            Normalization::Area => self.area_sqkm(entity, name),
            Normalization::Population => self.population(entity, name).map(|p| p as f64),
        };

        match denom {
            Some(d) if d > 0.0 => value / d,
            _ => {
                log::warn!(
                    "{denominator} for {entity} \"{name}\" is missing or invalid; using raw value"
                );
                value
            }
        }
    }
}

fn fold_keys<V>(map: BTreeMap<String, V>) -> BTreeMap<String, V> {
    map.into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect()
}
