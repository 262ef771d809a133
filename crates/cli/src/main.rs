use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use surveymap_core::{env_parse_with_default, DEFAULT_PORT};

mod commands;

#[derive(Parser)]
#[command(name = "surveymap")]
#[command(about = "Survey comment map dashboard and preprocessing pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the one-shot preprocessing pipeline: spreadsheets + shapefile in,
    /// GeoJSON out
    Preprocess {
        /// Survey export workbook (repeat the flag for each file)
        #[arg(short, long = "workbook", required = true)]
        workbooks: Vec<PathBuf>,
        /// Sheet name shared by the workbooks
        #[arg(short, long, default_value = surveymap_core::SURVEY_SHEET_NAME)]
        sheet: String,
        /// Study-area boundary shapefile (.shp)
        #[arg(short, long)]
        boundary: PathBuf,
        /// Proj string of the boundary's source CRS (omit if already WGS84)
        #[arg(long, default_value = "")]
        boundary_proj: String,
        /// Output directory for sa.geojson and comments.geojson
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(short, long, default_value_t = env_parse_with_default("SURVEYMAP_PORT", DEFAULT_PORT))]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Boundary GeoJSON written by the preprocessor
        #[arg(long, default_value = surveymap_core::BOUNDARY_FILE)]
        boundaries: PathBuf,
        /// Comments GeoJSON written by the preprocessor
        #[arg(long, default_value = surveymap_core::COMMENTS_FILE)]
        comments: PathBuf,
        /// Directory of static branding assets served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preprocess { workbooks, sheet, boundary, boundary_proj, out_dir } => {
            commands::preprocess::run(workbooks, sheet, boundary, boundary_proj, out_dir)
        },
        Commands::Serve { port, host, boundaries, comments, static_dir } => {
            commands::serve::run(port, host, boundaries, comments, static_dir).await
        },
    }
}
