//! Free-text query normalization.

use crate::calendar;
use crate::config::GeoqueryConfig;
use crate::extract::{extract_days, extract_location, extract_magnitude, extract_radius_km};
use crate::models::{QueryOverrides, QueryParameters, SearchStrategy};
use crate::Result;
use chrono::{NaiveDate, Utc};

/// Turns free-text queries into canonical [`QueryParameters`].
///
/// Per field, an explicit override beats the extractor result, which beats
/// the configured default. The calendar resolver is consulted only for an
/// explicit `time_period` override; day-count phrases inside the query
/// text ("last 14 days", "past week") go through the cheaper day-count
/// extractor instead.
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    config: GeoqueryConfig,
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryNormalizer {
    /// Creates a normalizer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeoqueryConfig::default(),
        }
    }

    /// Creates a normalizer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GeoqueryConfig) -> Self {
        Self { config }
    }

    /// Normalizes a query against today's date.
    ///
    /// # Errors
    ///
    /// Fails only when a `time_period` override is present and cannot be
    /// resolved (unparseable, ambiguous season, or outside the archive's
    /// validity window).
    pub fn normalize(&self, query: &str, overrides: &QueryOverrides) -> Result<QueryParameters> {
        self.normalize_at(query, overrides, Utc::now().date_naive())
    }

    /// Normalizes a query against an explicit reference date.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QueryNormalizer::normalize`].
    pub fn normalize_at(
        &self,
        query: &str,
        overrides: &QueryOverrides,
        reference_date: NaiveDate,
    ) -> Result<QueryParameters> {
        let location = overrides
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .or_else(|| extract_location(query));

        let explicit_radius = overrides.radius_km.or_else(|| extract_radius_km(query));

        let magnitude_threshold = overrides
            .magnitude_threshold
            .or_else(|| extract_magnitude(query))
            .unwrap_or(self.config.default_magnitude);

        // An explicit time period produces a concrete range; otherwise a
        // trailing window, defaulted when the query names none.
        let (date_range, days_back) = match overrides.time_period.as_deref() {
            Some(expression) => {
                let range = calendar::resolve_date_range(
                    expression,
                    reference_date,
                    self.config.constraints,
                )?;
                (Some(range), None)
            }
            None => {
                let days = overrides
                    .days_back
                    .or_else(|| extract_days(query))
                    .unwrap_or(self.config.default_days_back);
                (None, Some(days))
            }
        };

        let radius_km = explicit_radius.or_else(|| {
            location
                .is_some()
                .then_some(self.config.default_radius_km)
        });

        let strategy = match (&location, explicit_radius) {
            (Some(_), Some(_)) => SearchStrategy::Radius,
            (Some(_), None) => SearchStrategy::BoundingBox,
            (None, _) => SearchStrategy::Global,
        };

        let params = QueryParameters {
            query: query.to_string(),
            location,
            date_range,
            days_back,
            magnitude_threshold: Some(magnitude_threshold),
            radius_km,
            strategy,
        };
        tracing::debug!(?params.location, ?params.strategy, "normalized query");
        Ok(params)
    }
}
