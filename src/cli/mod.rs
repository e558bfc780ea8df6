//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `parse` | Normalize a free-text query into canonical parameters |
//! | `resolve` | Resolve a time expression into a concrete date range |
//! | `boundaries` | Resolve a location name into a bounding box |
//!
//! # Example Usage
//!
//! ```bash
//! # Normalize a query
//! geoquery parse "magnitude 5+ earthquakes near tokyo in the past week"
//!
//! # Resolve a time expression
//! geoquery resolve "past 5 years"
//!
//! # Resolve a region
//! geoquery boundaries "pacific ring of fire"
//! ```
//!
//! All commands print pretty JSON to stdout. The `boundaries` command uses
//! the static region table only; wiring a live geocoder is the embedding
//! application's job.

// CLI output goes to stdout by design
#![allow(clippy::print_stdout)]

use crate::calendar;
use crate::config::GeoqueryConfig;
use crate::geocoding::NoopGeocoder;
use crate::models::QueryOverrides;
use crate::services::{BoundaryResolver, QueryNormalizer};
use crate::{Error, Result};
use chrono::{NaiveDate, Utc};

/// Normalizes a query and prints the canonical parameters.
///
/// # Errors
///
/// Returns an error when a `time_period` override cannot be resolved.
pub fn cmd_parse(config: &GeoqueryConfig, query: &str, overrides: &QueryOverrides) -> Result<()> {
    let normalizer = QueryNormalizer::with_config(config.clone());
    let params = normalizer.normalize(query, overrides)?;
    print_json(&params)
}

/// Resolves a time expression and prints the date range.
///
/// # Errors
///
/// Returns an error when the expression is unparseable, ambiguous, or
/// outside the archive's validity window.
pub fn cmd_resolve(
    config: &GeoqueryConfig,
    expression: &str,
    reference_date: Option<NaiveDate>,
) -> Result<()> {
    let reference = reference_date.unwrap_or_else(|| Utc::now().date_naive());
    let range = calendar::resolve_date_range(expression, reference, config.constraints)?;
    print_json(&range)
}

/// Resolves a location name against the static region table and prints
/// the bounding box.
///
/// # Errors
///
/// Returns an error when the name is empty or unknown.
pub fn cmd_boundaries(config: &GeoqueryConfig, location: &str) -> Result<()> {
    let resolver = BoundaryResolver::with_config(Box::new(NoopGeocoder), config);
    let bbox = resolver.resolve(location)?;
    print_json(&bbox)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| Error::OperationFailed {
        operation: "render_json".to_string(),
        cause: e.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}
