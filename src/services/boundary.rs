//! Geographic boundary resolution.

use super::regions;
use crate::config::GeoqueryConfig;
use crate::geocoding::Geocoder;
use crate::models::BoundingBox;
use crate::{Error, Result};

/// Resolves a location name to a rectangular search area.
///
/// Resolution is two-tiered: a [`Geocoder`] lookup first, then the static
/// named-region table when geocoding returns nothing or fails. Padding
/// around a geocoded centroid is chosen by feature class (country 5°,
/// admin division 2°, populated place 0.5°) and falls back to the
/// configured default for unclassified features.
pub struct BoundaryResolver {
    geocoder: Box<dyn Geocoder>,
    padding_degrees: f64,
    geocoder_results: usize,
}

impl BoundaryResolver {
    /// Creates a resolver with default configuration.
    #[must_use]
    pub fn new(geocoder: Box<dyn Geocoder>) -> Self {
        Self::with_config(geocoder, &GeoqueryConfig::default())
    }

    /// Creates a resolver with explicit configuration.
    #[must_use]
    pub fn with_config(geocoder: Box<dyn Geocoder>, config: &GeoqueryConfig) -> Self {
        Self {
            geocoder,
            padding_degrees: config.default_padding_degrees,
            geocoder_results: config.geocoder_results.max(1),
        }
    }

    /// Resolves a location name to a bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty name and
    /// [`Error::LocationNotFound`] when neither geocoding nor the static
    /// region table knows the name. Geocoder transport failures are
    /// logged and demoted to a static-table attempt, not surfaced.
    pub fn resolve(&self, location: &str) -> Result<BoundingBox> {
        let folded = location.trim().to_lowercase();
        if folded.is_empty() {
            return Err(Error::InvalidInput("empty location name".to_string()));
        }

        match self.geocoder.lookup(&folded, self.geocoder_results) {
            Ok(matches) => {
                if let Some(best) = matches.first() {
                    let padding = best
                        .feature_class()
                        .padding_degrees()
                        .unwrap_or(self.padding_degrees);
                    tracing::debug!(
                        location = %folded,
                        resolved = %best.name,
                        feature_code = %best.feature_code,
                        padding,
                        "geocoded location"
                    );
                    return Ok(BoundingBox::around(best.latitude, best.longitude, padding));
                }
                tracing::debug!(location = %folded, "geocoder returned no matches");
            }
            Err(e) => {
                tracing::warn!(location = %folded, error = %e, "geocoder lookup failed");
            }
        }

        regions::named_region(&folded).ok_or(Error::LocationNotFound { location: folded })
    }
}

impl std::fmt::Debug for BoundaryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryResolver")
            .field("padding_degrees", &self.padding_degrees)
            .field("geocoder_results", &self.geocoder_results)
            .finish_non_exhaustive()
    }
}
