#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the dengue map pipeline.
//!
//! Drives the full derivation from a CSV record snapshot: aggregation,
//! optional normalization, feature enrichment, and quantile classification.
//! The rendering boundary is a GeoJSON document on stdout (or a file).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dengue_map_analytics::{aggregate, location_insights, summarize};
use dengue_map_case_models::{Grouping, Metric, Normalization};
use dengue_map_choropleth::{EnrichOptions, compute_breakpoints, enrich, metric_values};
use dengue_map_geography::{GeoProfiles, suffix_text};
use geojson::{FeatureCollection, GeoJson};

#[derive(Parser)]
#[command(name = "dengue-map", about = "Dengue case map pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dataset totals and rate extrema
    Summary {
        /// Path to the case record CSV (loc,cases,deaths,date,Region)
        #[arg(long)]
        records: PathBuf,
    },
    /// Enrich a GeoJSON feature collection with classified case statistics
    Enrich {
        /// Path to the case record CSV (loc,cases,deaths,date,Region)
        #[arg(long)]
        records: PathBuf,
        /// Path to the GeoJSON feature collection to enrich
        #[arg(long)]
        features: PathBuf,
        /// Path to the lookup-table JSON (locations, regions, name mappings)
        #[arg(long)]
        profiles: Option<PathBuf>,
        /// Metric to color by
        #[arg(long, default_value = "cases")]
        metric: Metric,
        /// Group statistics by location or region
        #[arg(long, default_value = "location")]
        group_by: Grouping,
        /// Denominator for count scaling
        #[arg(long, default_value = "area_sqkm")]
        normalize: Normalization,
        /// Write the enriched GeoJSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { records } => run_summary(&records),
        Commands::Enrich {
            records,
            features,
            profiles,
            metric,
            group_by,
            normalize,
            output,
        } => run_enrich(&RunEnrich {
            records,
            features,
            profiles,
            options: EnrichOptions {
                metric,
                group_by,
                normalization: normalize,
            },
            output,
        }),
    }
}

fn run_summary(records_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let records = dengue_map_ingest::read_records(records_path)?;
    log::info!("Loaded {} record(s)", records.len());

    let totals = aggregate(&records);
    let insights = location_insights(&totals);
    let summary = summarize(&records, &insights);

    println!("Total cases:     {}", summary.total_cases);
    println!("Total deaths:    {}", summary.total_deaths);
    println!("Total locations: {}", summary.total_locations);
    print_extremum("Highest mortality rate", summary.highest_mortality.as_ref(), "");
    print_extremum("Lowest mortality rate", summary.lowest_mortality.as_ref(), "");
    print_extremum("Highest CFR", summary.highest_cfr.as_ref(), "%");
    print_extremum("Lowest CFR", summary.lowest_cfr.as_ref(), "%");

    Ok(())
}

fn print_extremum(
    label: &str,
    extremum: Option<&dengue_map_analytics_models::RateExtremum>,
    suffix: &str,
) {
    match extremum {
        Some(e) => println!("{label}: {} ({:.2}{suffix})", e.location, e.value),
        None => println!("{label}: no data"),
    }
}

struct RunEnrich {
    records: PathBuf,
    features: PathBuf,
    profiles: Option<PathBuf>,
    options: EnrichOptions,
    output: Option<PathBuf>,
}

fn run_enrich(args: &RunEnrich) -> Result<(), Box<dyn std::error::Error>> {
    let records = dengue_map_ingest::read_records(&args.records)?;
    log::info!("Loaded {} record(s)", records.len());

    let profiles = match &args.profiles {
        Some(path) => GeoProfiles::load(path)?,
        None => {
            log::warn!("No profile tables supplied; normalization will fall back to raw values");
            GeoProfiles::default()
        }
    };

    let geojson: GeoJson = std::fs::read_to_string(&args.features)?.parse()?;
    let features = FeatureCollection::try_from(geojson)?;
    log::info!("Loaded {} feature(s)", features.features.len());

    let totals = aggregate(&records);
    let enriched = enrich(&features, &totals, &profiles, &args.options);

    let breakpoints = compute_breakpoints(&metric_values(&enriched, args.options.metric));
    log::info!(
        "Breakpoints for {}{}: {breakpoints:?}",
        args.options.metric,
        suffix_text(args.options.normalization, args.options.metric)
    );

    let document = serde_json::to_string_pretty(&enriched)?;
    match &args.output {
        Some(path) => std::fs::write(path, document)?,
        None => println!("{document}"),
    }

    Ok(())
}
