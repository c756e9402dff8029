//! # Yantra CLI Application
//!
//! Terminal front end for the instrument geometry engine. Collects the site
//! latitude, longitude and scale (from flags or interactive prompts), runs a
//! site survey and prints either a construction report or JSON.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`),
//! so `--format json` output on stdout stays machine-readable.

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use yantra_core::config::EngineConfig;
use yantra_core::engine::{survey, SiteRequest};
use yantra_core::file_io::{load_config, save_config};

#[derive(Parser)]
#[command(name = "yantra_cli")]
#[command(about = "Construction dimensions for Jantar Mantar instruments at any latitude")]
#[command(version)]
struct Args {
    /// Observer latitude in decimal degrees north, strictly between 0 and 90
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Site longitude in decimal degrees east, for the clock correction
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Scale factor R in the output length unit
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// JSON engine config; missing fields take their defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the effective config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Ask for a number on stderr, falling back to `default` on empty input.
fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    eprint!("{} [{}]: ", prompt, default);
    io::stderr().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    parse_or_default(&input, default)
}

fn parse_or_default(input: &str, default: f64) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .with_context(|| format!("'{}' is not a number", trimmed))
}

/// Fill in whatever the flags left out.
///
/// A missing latitude means an interactive session, so the longitude is
/// prompted for too. Otherwise a missing longitude just skips calibration.
fn build_request(args: &Args, config: &EngineConfig) -> Result<SiteRequest> {
    let defaults = &config.defaults;
    let interactive = args.latitude.is_none();

    let latitude_deg = match args.latitude {
        Some(value) => value,
        None => prompt_f64("Latitude (deg N)", defaults.latitude_deg)?,
    };
    let longitude_deg = match args.longitude {
        Some(value) => Some(value),
        None if interactive => Some(prompt_f64("Longitude (deg E)", defaults.longitude_deg)?),
        None => None,
    };
    let scale = match args.scale {
        Some(value) => value,
        None => prompt_f64("Scale factor R", defaults.scale)?,
    };

    Ok(SiteRequest {
        latitude_deg,
        scale,
        longitude_deg,
    })
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(path) = &args.write_config {
        save_config(&config, path).with_context(|| format!("failed to write config {}", path.display()))?;
        eprintln!("Config written to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let request = build_request(&args, &config)?;
    tracing::info!(?request, "running survey");

    match survey(&request, &config) {
        Ok(result) => {
            match args.format {
                Format::Text => print!("{}", report::render_text(&result)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
