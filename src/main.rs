use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use fieldarea::api::fetch_fields;
use fieldarea::config::FileConfig;
use fieldarea::domain::FieldPolygon;
use fieldarea::geojson;
use fieldarea::geometry::{UnitSystem, epsilon_from_meters, simplify_ring};
use fieldarea::report::render_report;

/// Measure and report areas of geographic field polygons
///
/// Examples:
///   # Report areas for fields stored in a GeoJSON file
///   fieldarea fields.geojson
///
///   # ASCII unit suffixes and simplified boundaries
///   fieldarea fields.geojson --units ascii --simplify 5.0
///
///   # Fetch your fields from the persistence API
///   fieldarea --url https://fields.example.com --token $TOKEN
///
///   # Write the normalized boundaries back out
///   fieldarea fields.geojson --geometry-out normalized.geojson
#[derive(Parser, Debug)]
#[command(name = "fieldarea")]
#[command(version, about, long_about = None)]
struct Args {
    /// GeoJSON input file (FeatureCollection, Feature, or bare geometry)
    input: Option<PathBuf>,

    /// Path to config file (optional, auto-searches fieldarea.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the field persistence API (alternative to a file input)
    #[arg(long)]
    url: Option<String>,

    /// Bearer token for the field API (use with --url)
    #[arg(long)]
    token: Option<String>,

    /// Unit suffixes for formatted areas
    #[arg(long, value_enum, default_value = "cyrillic")]
    units: UnitSystem,

    /// Simplify boundaries with the given tolerance in meters before measuring
    #[arg(long)]
    simplify: Option<f64>,

    /// Write normalized boundaries out as a GeoJSON FeatureCollection
    #[arg(long)]
    geometry_out: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let url = args
        .url
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.url.clone()));
    let token = args
        .token
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.token.clone()));
    let units = if args.units != UnitSystem::Cyrillic {
        args.units
    } else {
        file_config
            .as_ref()
            .map(|c| c.units)
            .unwrap_or(UnitSystem::Cyrillic)
    };
    let simplify = args
        .simplify
        .or_else(|| file_config.as_ref().and_then(|c| c.simplify));
    let geometry_out = args
        .geometry_out
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.geometry_out.clone()));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    if args.input.is_none() && url.is_none() {
        bail!("Must provide a GeoJSON input file, or --url (and --token) for the field API");
    }
    if args.input.is_some() && url.is_some() {
        bail!("Provide either a GeoJSON input file or --url, not both");
    }

    println!("fieldarea - Field Area Report");
    println!("=============================");
    println!();

    if verbose {
        println!("Configuration:");
        if let Some(ref path) = args.input {
            println!("  Input: {}", path.display());
        }
        if let Some(ref u) = url {
            println!("  API: {}", u);
        }
        println!("  Units: {:?}", units);
        if let Some(m) = simplify {
            println!("  Simplify tolerance: {}m", m);
        }
        if let Some(ref path) = geometry_out {
            println!("  Geometry output: {}", path.display());
        }
        println!();
    }

    let mut fields: Vec<FieldPolygon> = if let Some(ref path) = args.input {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        geojson::read_fields(&contents)
            .with_context(|| format!("Failed to parse GeoJSON from {}", path.display()))?
    } else {
        let base_url = url.as_deref().unwrap();
        let token = match token {
            Some(t) => t,
            None => bail!("--url requires a token (--token or config file)"),
        };

        let spinner = create_spinner("Fetching fields from the field API...");
        let start = Instant::now();
        let fetched = fetch_fields(base_url, &token).context("Failed to fetch fields")?;
        spinner.finish_with_message(format!(
            "Fetched {} fields [{:.1}s]",
            fetched.len(),
            start.elapsed().as_secs_f32()
        ));
        fetched
    };

    if fields.is_empty() {
        bail!("No fields found in the input");
    }

    if let Some(meters) = simplify {
        let epsilon = epsilon_from_meters(meters);
        for field in &mut fields {
            let before = field.ring.len();
            field.ring = simplify_ring(&field.ring, epsilon);
            if verbose && field.ring.len() < before {
                println!(
                    "  Simplified {}: {} -> {} vertices",
                    field.name,
                    before,
                    field.ring.len()
                );
            }
        }
        if verbose {
            println!();
        }
    }

    if verbose {
        for field in &fields {
            let marker = match field.centroid() {
                Some((lat, lon)) => format!("({:.5}, {:.5})", lat, lon),
                None => "n/a".to_string(),
            };
            println!(
                "  {}: {} vertices, marker at {}",
                field.name,
                field.ring.len(),
                marker
            );
        }
        println!();
    }

    print!("{}", render_report(&fields, units.labels()));

    if let Some(ref path) = geometry_out {
        let json = geojson::collection_to_json(&fields);
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write geometry file: {}", path.display()))?;
        println!();
        println!("Wrote normalized boundaries to {}", path.display());
    }

    if verbose {
        println!();
        println!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
