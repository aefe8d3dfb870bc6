//! Isoline extractor.
//!
//! Reads a mesh document with per-node heights (and optionally
//! precipitation), generates the configured isoline groups and writes them
//! out as CSV and JSON.

mod document;
mod extract;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use isoline_common::PresetFile;

use extract::ExtractOptions;

#[derive(Parser, Debug)]
#[command(name = "isoline-extractor")]
#[command(about = "Extract contours, isobaths and isohyets from mesh data")]
struct Cli {
    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate isolines from a mesh document
    Extract {
        /// Path to the mesh JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Group presets (YAML or JSON); built-in groups when omitted
        #[arg(short, long, env = "ISOLINE_PRESETS")]
        presets: Option<PathBuf>,

        /// CSV output path (stdout when omitted)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Optional JSON dump of the generated collection
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print the built-in group presets as YAML
    Presets,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so CSV on stdout stays clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Extract {
            input,
            presets,
            csv,
            json,
        } => {
            info!(input = %input.display(), "Starting isoline extraction");
            let options = ExtractOptions {
                input,
                presets,
                csv,
                json,
            };
            let collection = extract::run(&options)?;
            info!(
                groups = collection.len(),
                isolines = collection.total_isolines(),
                "Extraction complete"
            );
        }
        Commands::Presets => {
            print!("{}", PresetFile::default().to_yaml()?);
        }
    }

    Ok(())
}
