//! Downstream data-provider contract.
//!
//! Normalized parameters are translated into a [`ProviderQuery`] whose
//! fields mirror the FDSN-style event search APIs (start/end time, minimum
//! magnitude, circle or rectangle constraint). Providers fetch raw records
//! and stay out of the parsing core; like [`crate::geocoding::Geocoder`],
//! the trait keeps HTTP at the edges.

use crate::models::{BoundingBox, QueryParameters, SearchStrategy};
use crate::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A spatial constraint on a provider search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchArea {
    /// Circular search around a point.
    Circle {
        /// Center latitude.
        latitude: f64,
        /// Center longitude.
        longitude: f64,
        /// Radius in kilometers.
        radius_km: u32,
    },
    /// Rectangular search.
    Rectangle(BoundingBox),
}

/// A concrete request against a downstream event archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuery {
    /// Inclusive start date, when a calendar range was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date, when a calendar range was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Trailing window in days, when no calendar range was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_back: Option<u32>,
    /// Minimum magnitude filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_magnitude: Option<f64>,
    /// Spatial constraint; `None` means a global search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<SearchArea>,
    /// Maximum number of records to return.
    pub limit: usize,
}

/// Default record cap for provider searches.
pub const DEFAULT_RECORD_LIMIT: usize = 1000;

impl ProviderQuery {
    /// Builds a provider query from normalized parameters.
    ///
    /// The spatial constraint is left as `None` for both the global and
    /// bounding-box strategies; callers resolve a box separately (via
    /// [`crate::services::BoundaryResolver`]) and attach it with
    /// [`ProviderQuery::with_rectangle`]. The radius strategy needs a
    /// centroid, which parameters alone do not carry, so it is attached
    /// the same way via [`ProviderQuery::with_circle`].
    #[must_use]
    pub fn from_parameters(params: &QueryParameters) -> Self {
        Self {
            start_date: params.date_range.as_ref().map(|r| r.start_date),
            end_date: params.date_range.as_ref().map(|r| r.end_date),
            days_back: params.days_back,
            min_magnitude: params.magnitude_threshold,
            area: None,
            limit: DEFAULT_RECORD_LIMIT,
        }
    }

    /// Attaches a rectangular constraint.
    #[must_use]
    pub const fn with_rectangle(mut self, bbox: BoundingBox) -> Self {
        self.area = Some(SearchArea::Rectangle(bbox));
        self
    }

    /// Attaches a circular constraint.
    #[must_use]
    pub const fn with_circle(mut self, latitude: f64, longitude: f64, radius_km: u32) -> Self {
        self.area = Some(SearchArea::Circle {
            latitude,
            longitude,
            radius_km,
        });
        self
    }

    /// Caps the number of returned records.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether the normalized parameters call for a circular constraint.
    #[must_use]
    pub fn wants_circle(params: &QueryParameters) -> bool {
        params.strategy == SearchStrategy::Radius
    }
}

/// A single record from a downstream archive, kept as raw JSON.
///
/// Schema interpretation is the caller's concern; the parsing core never
/// looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Provider-specific payload.
    pub payload: serde_json::Value,
}

impl RawRecord {
    /// Wraps a raw payload.
    #[must_use]
    pub const fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }
}

/// A searchable event archive.
pub trait DataProvider: Send + Sync {
    /// Short provider name, for logging.
    fn name(&self) -> &str;

    /// Executes a search.
    ///
    /// # Errors
    ///
    /// Returns an error for transport or protocol failures; an empty
    /// result set is `Ok(vec![])`.
    fn fetch(&self, query: &ProviderQuery) -> Result<Vec<RawRecord>>;
}
