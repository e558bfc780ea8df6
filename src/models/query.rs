//! Canonical query parameter types produced by the normalizer.

use super::time::ResolvedDateRange;
use serde::{Deserialize, Serialize};

/// Canonical output of query normalization.
///
/// Exactly one of `date_range` or `days_back` is populated for any given
/// search: the extractor layer produces a day count, the calendar resolver
/// produces a concrete range, and callers pick the downstream request
/// field accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// The original free-text query, echoed for audit and debugging. Not
    /// used for any further computation.
    pub query: String,
    /// Resolved location name, if any. Never defaulted; absence routes the
    /// caller toward a global search.
    pub location: Option<String>,
    /// Concrete date range, when an explicit time period was resolved.
    pub date_range: Option<ResolvedDateRange>,
    /// Trailing window in days, when no explicit time period was given.
    pub days_back: Option<u32>,
    /// Minimum magnitude (or discharge) threshold.
    pub magnitude_threshold: Option<f64>,
    /// Search radius in kilometers around the location.
    pub radius_km: Option<u32>,
    /// Which downstream search strategy applies.
    pub strategy: SearchStrategy,
}

/// Downstream search strategy, decided by the normalizer and exposed to
/// the caller (not enforced internally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Location with an explicitly requested radius: circular search.
    Radius,
    /// Location without an explicit radius: rectangular search via the
    /// boundary resolver.
    BoundingBox,
    /// No location: global search filtered by time and magnitude only.
    Global,
}

/// Explicit caller overrides for query normalization.
///
/// Any field set here wins over the corresponding extractor result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOverrides {
    /// Location name override.
    pub location: Option<String>,
    /// Day-count override.
    pub days_back: Option<u32>,
    /// Magnitude threshold override.
    pub magnitude_threshold: Option<f64>,
    /// Radius override in kilometers.
    pub radius_km: Option<u32>,
    /// Explicit time-period expression ("past 5 years", "winter 2023").
    /// Routes through the calendar resolver and yields `date_range`
    /// instead of `days_back`.
    pub time_period: Option<String>,
}

impl QueryOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the location override.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the day-count override.
    #[must_use]
    pub const fn with_days_back(mut self, days: u32) -> Self {
        self.days_back = Some(days);
        self
    }

    /// Sets the magnitude threshold override.
    #[must_use]
    pub const fn with_magnitude_threshold(mut self, threshold: f64) -> Self {
        self.magnitude_threshold = Some(threshold);
        self
    }

    /// Sets the radius override.
    #[must_use]
    pub const fn with_radius_km(mut self, radius: u32) -> Self {
        self.radius_km = Some(radius);
        self
    }

    /// Sets an explicit time-period expression.
    #[must_use]
    pub fn with_time_period(mut self, expression: impl Into<String>) -> Self {
        self.time_period = Some(expression.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_builder() {
        let overrides = QueryOverrides::new()
            .with_location("tokyo")
            .with_days_back(14)
            .with_magnitude_threshold(5.5)
            .with_radius_km(300);
        assert_eq!(overrides.location.as_deref(), Some("tokyo"));
        assert_eq!(overrides.days_back, Some(14));
        assert_eq!(overrides.magnitude_threshold, Some(5.5));
        assert_eq!(overrides.radius_km, Some(300));
        assert!(overrides.time_period.is_none());
    }

    #[test]
    fn test_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&SearchStrategy::BoundingBox).unwrap();
        assert_eq!(json, "\"bounding_box\"");
    }
}
