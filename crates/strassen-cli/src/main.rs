mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default Geofabrik extract covering the Karlsruhe region.
const DEFAULT_EXTRACT_URL: &str =
    "https://download.geofabrik.de/europe/germany/baden-wuerttemberg/karlsruhe-regbez-latest.osm.bz2";

#[derive(Parser)]
#[command(
    name = "strassen",
    version,
    about = "Street name history pipeline: PDF scraping, OSM filtering, GeoJSON merging"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract street records from the city's street name PDF
    Extract {
        /// Path to the street name PDF
        #[arg(default_value = "strassennamen.pdf")]
        pdf_file: PathBuf,

        /// Output JSON file with the parsed records
        #[arg(short = 'O', long = "out", default_value = "streetnames.json")]
        out: PathBuf,
    },
    /// Download the regional OSM extract (reuses the cache when the
    /// remote checksum is unchanged)
    Fetch {
        /// URL of the extract; its checksum is expected at <url>.md5
        #[arg(long, default_value = DEFAULT_EXTRACT_URL)]
        url: String,

        /// Directory for the extract and its checksum file
        #[arg(long, default_value = "osm")]
        dir: PathBuf,
    },
    /// Filter the extract to named highways inside the city boundary
    /// (invokes osmosis)
    Filter {
        /// Path to the downloaded extract
        #[arg(default_value = "osm/karlsruhe-regbez-latest.osm.bz2")]
        extract: PathBuf,

        /// Bounding polygon in Osmosis poly format
        #[arg(long, default_value = "data/karlsruhe.poly")]
        polygon: PathBuf,

        /// Filtered OSM XML output
        #[arg(short = 'O', long = "out", default_value = "highways.osm")]
        out: PathBuf,
    },
    /// Convert filtered highway geometries to GeoJSON
    Coordinates {
        /// Filtered OSM XML input
        #[arg(default_value = "highways.osm")]
        input: PathBuf,

        /// GeoJSON output
        #[arg(short = 'O', long = "out", default_value = "streets.geojson")]
        out: PathBuf,
    },
    /// Merge street records with street geometry into one FeatureCollection
    Merge {
        /// Parsed street records (output of `extract`)
        #[arg(long, default_value = "streetnames.json")]
        records: PathBuf,

        /// Street geometry (output of `coordinates`)
        #[arg(long, default_value = "streets.geojson")]
        coordinates: PathBuf,

        /// Merged GeoJSON output
        #[arg(short = 'O', long = "out", default_value = "streetnames.geojson")]
        out: PathBuf,
    },
    /// Split the merged collection into the per-view datasets of the
    /// visualization
    Datasets {
        /// Merged GeoJSON (output of `merge`)
        #[arg(default_value = "streetnames.geojson")]
        input: PathBuf,

        /// Directory the view files are written to
        #[arg(long, default_value = "web")]
        out_dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { pdf_file, out } => commands::extract::run(pdf_file, out),
        Commands::Fetch { url, dir } => commands::fetch::run(&url, dir),
        Commands::Filter {
            extract,
            polygon,
            out,
        } => commands::filter::run(extract, polygon, out),
        Commands::Coordinates { input, out } => commands::coordinates::run(input, out),
        Commands::Merge {
            records,
            coordinates,
            out,
        } => commands::merge::run(records, coordinates, out),
        Commands::Datasets { input, out_dir } => commands::datasets::run(input, out_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
