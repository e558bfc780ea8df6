//! Binary entry point for geoquery.
//!
//! This binary provides the CLI interface for the query parsing engine.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use geoquery::config::GeoqueryConfig;
use geoquery::models::QueryOverrides;
use geoquery::observability::{self, InitOptions, LogFormat};
use geoquery::{cli, Error};
use std::process::ExitCode;

/// Geoquery - natural-language query parsing for geospatial data sources.
#[derive(Parser)]
#[command(name = "geoquery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Normalize a free-text query into canonical parameters.
    Parse {
        /// The query text.
        query: String,

        /// Location override (beats the extracted location).
        #[arg(short, long)]
        location: Option<String>,

        /// Day-count override.
        #[arg(short, long)]
        days_back: Option<u32>,

        /// Minimum-magnitude override.
        #[arg(short, long)]
        magnitude: Option<f64>,

        /// Search-radius override in kilometers.
        #[arg(short, long)]
        radius_km: Option<u32>,

        /// Explicit time period ("past 5 years", "winter 2023").
        #[arg(short, long)]
        time_period: Option<String>,
    },

    /// Resolve a time expression into a concrete date range.
    Resolve {
        /// The time expression.
        expression: String,

        /// Reference date (YYYY-MM-DD, default today).
        #[arg(short, long)]
        reference_date: Option<NaiveDate>,
    },

    /// Resolve a location name into a bounding box.
    Boundaries {
        /// The location name.
        location: String,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    if let Err(e) = observability::init_from_env(InitOptions {
        verbose: cli.verbose,
        format,
    }) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &GeoqueryConfig) -> Result<(), Error> {
    match cli.command {
        Commands::Parse {
            query,
            location,
            days_back,
            magnitude,
            radius_km,
            time_period,
        } => {
            let overrides = QueryOverrides {
                location,
                days_back,
                magnitude_threshold: magnitude,
                radius_km,
                time_period,
            };
            cli::cmd_parse(config, &query, &overrides)
        }

        Commands::Resolve {
            expression,
            reference_date,
        } => cli::cmd_resolve(config, &expression, reference_date),

        Commands::Boundaries { location } => cli::cmd_boundaries(config, &location),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<GeoqueryConfig, Error> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return GeoqueryConfig::load_from_file(std::path::Path::new(config_path));
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("GEOQUERY_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return GeoqueryConfig::load_from_file(std::path::Path::new(&config_path));
        }
    }

    // Otherwise, load from default location
    Ok(GeoqueryConfig::load_default())
}
