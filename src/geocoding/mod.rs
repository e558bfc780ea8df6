//! Geocoding collaborator contract.
//!
//! The core never performs HTTP itself; callers hand it a [`Geocoder`]
//! implementation (typically an Open-Meteo geocoding client) and the
//! boundary resolver consumes the first result. No retry or timeout
//! policy is imposed here; the calling layer may wrap the trait object
//! with one.

use crate::Result;
use crate::models::LocationMatch;

/// A place-name lookup service.
///
/// Implementations return up to `count` candidate matches, best first,
/// and may legitimately return an empty list for unknown names.
pub trait Geocoder: Send + Sync {
    /// Looks up a place name.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures; "no results"
    /// is an empty `Vec`, not an error.
    fn lookup(&self, name: &str, count: usize) -> Result<Vec<LocationMatch>>;
}

/// A geocoder that knows nothing.
///
/// Used by callers that want static-table-only boundary resolution (the
/// CLI) and as a degenerate case in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGeocoder;

impl Geocoder for NoopGeocoder {
    fn lookup(&self, _name: &str, _count: usize) -> Result<Vec<LocationMatch>> {
        Ok(Vec::new())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_geocoder_returns_empty() {
        let geocoder = NoopGeocoder;
        assert!(geocoder.lookup("Tokyo", 5).unwrap().is_empty());
    }
}
