//! Location and search-area types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geocoding result for a place name.
///
/// Field names follow the Open-Meteo geocoding response shape. Produced by
/// a [`crate::geocoding::Geocoder`] collaborator, consumed by the boundary
/// resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMatch {
    /// Resolved place name.
    pub name: String,
    /// Country the place belongs to.
    #[serde(default)]
    pub country: String,
    /// Latitude of the place centroid.
    pub latitude: f64,
    /// Longitude of the place centroid.
    pub longitude: f64,
    /// Geocoding feature code (e.g. "PCLI", "ADM1", "PPLC").
    #[serde(default)]
    pub feature_code: String,
    /// Population, when the provider reports one.
    #[serde(default)]
    pub population: Option<u64>,
}

impl LocationMatch {
    /// Classifies the feature code into a padding class.
    #[must_use]
    pub fn feature_class(&self) -> FeatureClass {
        FeatureClass::from_code(&self.feature_code)
    }
}

/// Coarse classification of geocoding feature codes.
///
/// Governs how much padding the boundary resolver puts around a centroid:
/// a country match needs a far wider search box than a city match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureClass {
    /// Country-level features (PCLI, PCL, PCLD, PCLF, PCLS).
    Country,
    /// First-level administrative divisions (ADM1).
    AdminDivision,
    /// Populated places: cities, capitals, admin seats (PPL*).
    PopulatedPlace,
    /// Anything else (mountains, regions, postal codes, ...).
    Other,
}

impl FeatureClass {
    /// Maps a raw geocoding feature code to a class.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "PCLI" | "PCL" | "PCLD" | "PCLF" | "PCLS" => Self::Country,
            "ADM1" => Self::AdminDivision,
            c if c.starts_with("PPL") => Self::PopulatedPlace,
            _ => Self::Other,
        }
    }

    /// Padding in degrees applied around a centroid of this class, or
    /// `None` when the caller-supplied padding should be used.
    #[must_use]
    pub const fn padding_degrees(self) -> Option<f64> {
        match self {
            Self::Country => Some(5.0),
            Self::AdminDivision => Some(2.0),
            Self::PopulatedPlace => Some(0.5),
            Self::Other => None,
        }
    }
}

/// A rectangular search area.
///
/// # Antimeridian Convention
///
/// Boxes that cross the ±180° meridian are represented with
/// `min_lon > max_lon` (e.g. the Pacific Ring of Fire spans 120°E to
/// 70°W). [`BoundingBox::contains`] treats such a box as a wraparound
/// range: a longitude is inside when it is `>= min_lon` **or**
/// `<= max_lon`. Consumers doing their own containment math must honor the
/// same convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge (may exceed `max_lon` for wraparound boxes).
    pub min_lon: f64,
    /// Eastern edge.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Creates a box from explicit edges.
    #[must_use]
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Creates a symmetric box around a centroid.
    ///
    /// Latitude edges are clamped to ±90°; longitude edges are left
    /// unnormalized (the search APIs accept values slightly past ±180°).
    #[must_use]
    pub fn around(latitude: f64, longitude: f64, padding_degrees: f64) -> Self {
        Self {
            min_lat: (latitude - padding_degrees).max(-90.0),
            max_lat: (latitude + padding_degrees).min(90.0),
            min_lon: longitude - padding_degrees,
            max_lon: longitude + padding_degrees,
        }
    }

    /// Whether this box crosses the antimeridian.
    #[must_use]
    pub fn wraps_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Checks whether a point lies inside the box, honoring the wraparound
    /// convention for boxes with `min_lon > max_lon`.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        if latitude < self.min_lat || latitude > self.max_lat {
            return false;
        }
        if self.wraps_antimeridian() {
            longitude >= self.min_lon || longitude <= self.max_lon
        } else {
            longitude >= self.min_lon && longitude <= self.max_lon
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] x [{:.2}, {:.2}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("PCLI", FeatureClass::Country; "independent country")]
    #[test_case("PCLD", FeatureClass::Country; "dependent country")]
    #[test_case("ADM1", FeatureClass::AdminDivision; "state or province")]
    #[test_case("PPL", FeatureClass::PopulatedPlace; "populated place")]
    #[test_case("PPLC", FeatureClass::PopulatedPlace; "capital")]
    #[test_case("PPLA2", FeatureClass::PopulatedPlace; "admin seat")]
    #[test_case("MT", FeatureClass::Other; "mountain")]
    #[test_case("", FeatureClass::Other; "empty code")]
    fn test_feature_class_from_code(code: &str, expected: FeatureClass) {
        assert_eq!(FeatureClass::from_code(code), expected);
    }

    #[test]
    fn test_feature_class_padding() {
        assert_eq!(FeatureClass::Country.padding_degrees(), Some(5.0));
        assert_eq!(FeatureClass::AdminDivision.padding_degrees(), Some(2.0));
        assert_eq!(FeatureClass::PopulatedPlace.padding_degrees(), Some(0.5));
        assert_eq!(FeatureClass::Other.padding_degrees(), None);
    }

    #[test]
    fn test_box_around_centroid() {
        let bbox = BoundingBox::around(35.68, 139.69, 0.5);
        assert!((bbox.min_lat - 35.18).abs() < 1e-9);
        assert!((bbox.max_lat - 36.18).abs() < 1e-9);
        assert!((bbox.min_lon - 139.19).abs() < 1e-9);
        assert!((bbox.max_lon - 140.19).abs() < 1e-9);
    }

    #[test]
    fn test_box_around_clamps_latitude() {
        let bbox = BoundingBox::around(88.0, 0.0, 5.0);
        assert!((bbox.max_lat - 90.0).abs() < 1e-9);
        assert!((bbox.min_lat - 83.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_normal_box() {
        let japan = BoundingBox::new(24.0, 46.0, 122.0, 146.0);
        assert!(japan.contains(35.68, 139.69)); // Tokyo
        assert!(!japan.contains(19.07, 72.87)); // Mumbai
    }

    #[test]
    fn test_contains_wraparound_box() {
        // Pacific Ring of Fire: 120E across the dateline to 70W
        let pacific = BoundingBox::new(-60.0, 60.0, 120.0, -70.0);
        assert!(pacific.wraps_antimeridian());
        assert!(pacific.contains(35.68, 139.69)); // Tokyo, east side
        assert!(pacific.contains(-33.45, -70.67)); // Santiago, west side
        assert!(pacific.contains(0.0, 180.0)); // on the dateline
        assert!(!pacific.contains(48.85, 2.35)); // Paris
    }

    #[test]
    fn test_location_match_feature_class() {
        let m = LocationMatch {
            name: "Japan".to_string(),
            country: "Japan".to_string(),
            latitude: 36.0,
            longitude: 138.0,
            feature_code: "PCLI".to_string(),
            population: Some(125_000_000),
        };
        assert_eq!(m.feature_class(), FeatureClass::Country);
    }
}
