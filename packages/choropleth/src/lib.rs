#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Choropleth classification and feature enrichment.
//!
//! Takes the aggregated per-location totals and a GeoJSON feature
//! collection, joins statistics onto every feature, and classifies metric
//! values into ten color buckets via quantile breakpoints. The output feeds
//! the rendering boundary directly; nothing here mutates its inputs.

pub mod classify;
pub mod enrich;
pub mod tooltip;

pub use classify::{
    BUCKET_COUNT, Breakpoints, COLOR_RAMP, classify, color_for, compute_breakpoints,
};
pub use enrich::{EnrichOptions, enrich, metric_values};
pub use tooltip::tooltip_lines;
