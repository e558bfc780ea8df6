//! Search-radius extraction from free text.

use super::patterns::RADIUS_RULES;

/// Kilometers per statute mile.
const MILES_TO_KM: f64 = 1.60934;

/// Extracts a search radius in kilometers from a query.
///
/// Kilometer patterns are checked before the mile pattern; mile values
/// are converted with the 1.60934 factor and rounded to the nearest
/// whole kilometer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn extract_radius_km(text: &str) -> Option<u32> {
    let folded = text.to_lowercase();

    for rule in RADIUS_RULES.iter() {
        let Some(caps) = rule.pattern.captures(&folded) else {
            continue;
        };
        let value: u32 = caps.get(1)?.as_str().parse().ok()?;
        let radius = if rule.miles {
            (f64::from(value) * MILES_TO_KM).round() as u32
        } else {
            value
        };
        tracing::trace!(radius, "extracted search radius");
        return Some(radius);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("within 200 km of Tokyo", Some(200); "within N km")]
    #[test_case("within 300km", Some(300); "within N km no space")]
    #[test_case("search a 150 km radius", Some(150); "N km radius")]
    #[test_case("within 500 kilometers", Some(500); "within N kilometers")]
    #[test_case("about 250 kilometers around", Some(250); "bare N kilometers")]
    #[test_case("within 200 miles", Some(322); "miles converted and rounded")]
    #[test_case("within 100 miles", Some(161); "one hundred miles")]
    #[test_case("earthquakes near Tokyo", None; "no radius")]
    fn test_extract_radius(query: &str, expected: Option<u32>) {
        assert_eq!(extract_radius_km(query), expected);
    }

    #[test]
    fn test_km_pattern_beats_mile_pattern() {
        assert_eq!(extract_radius_km("within 50 km or 40 miles"), Some(50));
    }
}
