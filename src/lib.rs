//! # Geoquery
//!
//! Natural-language query parsing for geospatial, weather, and seismic
//! data sources.
//!
//! Geoquery turns free-text queries like "magnitude 5+ earthquakes near
//! Tokyo in the past week" into canonical, validated query parameters, and
//! resolves natural-language time expressions ("past 5 years", "winter
//! 2023", "2022-2024") into concrete calendar date ranges under
//! source-specific validity constraints (minimum supported year, trailing
//! embargo window).
//!
//! ## Features
//!
//! - Deterministic first-rule-wins entity extraction (location, day count,
//!   magnitude threshold, search radius)
//! - Calendar resolution with embargo and epoch validation, never silently
//!   clamped
//! - Bounding-box derivation from geocoding feature classes or a static
//!   named-region table
//! - Tagged error results throughout, no exceptions for control flow
//!
//! ## Example
//!
//! ```rust
//! use geoquery::{QueryNormalizer, QueryOverrides};
//!
//! let normalizer = QueryNormalizer::new();
//! let params = normalizer
//!     .normalize("magnitude 5+ earthquakes near tokyo in the past week", &QueryOverrides::default())?;
//! assert_eq!(params.location.as_deref(), Some("tokyo"));
//! assert_eq!(params.days_back, Some(7));
//! # Ok::<(), geoquery::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod calendar;
pub mod cli;
pub mod config;
pub mod extract;
pub mod geocoding;
pub mod models;
pub mod observability;
pub mod providers;
pub mod services;

// Re-exports for convenience
pub use calendar::resolve_date_range;
pub use config::GeoqueryConfig;
pub use extract::{extract_days, extract_location, extract_magnitude, extract_radius_km};
pub use geocoding::Geocoder;
pub use models::{
    BoundingBox, FeatureClass, LocationMatch, QueryOverrides, QueryParameters, ResolvedDateRange,
    SearchStrategy, SourceConstraints, TimeExpression,
};
pub use providers::{DataProvider, ProviderQuery, RawRecord};
pub use services::{BoundaryResolver, QueryNormalizer};

/// Error type for geoquery operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Inverted date ranges, malformed override values |
/// | `UnparseableTimePeriod` | Time expression matches no known temporal pattern |
/// | `TooRecent` | Requested window ends inside the source's embargo period |
/// | `TooOld` | Requested window starts before the source's minimum year |
/// | `AmbiguousSeason` | Season word present without an accompanying year |
/// | `LocationNotFound` | Neither geocoding nor the static region table resolves a name |
/// | `OperationFailed` | Config file I/O, geocoder transport failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A year range resolves with `start > end` (e.g. "2024-2022")
    /// - Override values are structurally invalid
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The time expression matched no known temporal pattern.
    ///
    /// The offending text is surfaced verbatim so the caller can ask for a
    /// rephrasing.
    #[error("unable to parse time period: '{expression}'")]
    UnparseableTimePeriod {
        /// The expression that failed to parse.
        expression: String,
    },

    /// The requested window violates the source's embargo constraint.
    ///
    /// Never auto-clamped to the nearest valid date; the caller must
    /// resubmit with an earlier end.
    #[error("requested end date {end} is too recent; latest available is {latest_available}")]
    TooRecent {
        /// The requested end date.
        end: chrono::NaiveDate,
        /// The most recent date the source can serve.
        latest_available: chrono::NaiveDate,
    },

    /// The requested start predates the source's minimum supported year.
    ///
    /// Never auto-clamped.
    #[error("requested start year {year} predates the earliest supported year {min_year}")]
    TooOld {
        /// The requested start year.
        year: i32,
        /// The earliest year the source supports.
        min_year: i32,
    },

    /// A season word was present without an accompanying year.
    ///
    /// Reported rather than guessed; "winter" alone is ambiguous.
    #[error("season '{season}' needs a year; please specify one (e.g. '{season} 2023')")]
    AmbiguousSeason {
        /// The season word that was found.
        season: String,
    },

    /// Neither dynamic geocoding nor the static region table resolved a
    /// location name.
    #[error("unknown location: '{location}'")]
    LocationNotFound {
        /// The location name that could not be resolved.
        location: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - Config file reads or parses fail
    /// - A geocoding collaborator reports a transport-level failure
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for geoquery operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_error_display() {
        let err = Error::UnparseableTimePeriod {
            expression: "sometime soonish".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to parse time period: 'sometime soonish'"
        );

        let err = Error::TooOld {
            year: 1939,
            min_year: 1940,
        };
        assert_eq!(
            err.to_string(),
            "requested start year 1939 predates the earliest supported year 1940"
        );

        let err = Error::AmbiguousSeason {
            season: "winter".to_string(),
        };
        assert!(err.to_string().contains("please specify"));
    }

    #[test]
    fn test_too_recent_display_includes_dates() {
        let err = Error::TooRecent {
            end: NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
            latest_available: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2025-06-18"));
        assert!(msg.contains("2025-06-15"));
    }
}
