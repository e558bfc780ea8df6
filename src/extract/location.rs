//! Location extraction from free text.

use super::patterns::{LOCATION_PATTERNS, LOCATION_QUALIFIERS};

/// Extracts a location phrase from a query, if one is present.
///
/// Patterns are tried in a fixed order and the first match wins; there is
/// no scoring. Stray qualifier words ("the", "area", "region") are
/// stripped from the captured span, so "in the himalayan region" yields
/// "himalayan".
///
/// The result is case-folded ("tokyo", not "Tokyo").
#[must_use]
pub fn extract_location(text: &str) -> Option<String> {
    let folded = text.to_lowercase();

    for pattern in LOCATION_PATTERNS.iter() {
        let Some(caps) = pattern.captures(&folded) else {
            continue;
        };
        let Some(span) = caps.get(1) else {
            continue;
        };

        let cleaned = strip_qualifiers(span.as_str());
        if cleaned.is_empty() {
            // Captured nothing but qualifier words; try the next pattern.
            continue;
        }
        tracing::trace!(location = %cleaned, "extracted location");
        return Some(cleaned);
    }

    None
}

/// Removes qualifier words from a captured phrase and normalizes spacing.
fn strip_qualifiers(span: &str) -> String {
    span.split_whitespace()
        .filter(|word| !LOCATION_QUALIFIERS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("earthquakes in Japan last 14 days", Some("japan"); "in with temporal terminator")]
    #[test_case("seismic activity near Tokyo in the past week", Some("tokyo"); "second preposition terminates")]
    #[test_case("recent earthquakes around Mumbai", Some("mumbai"); "around at end of input")]
    #[test_case("magnitude 5+ earthquakes in California", Some("california"); "in at end of input")]
    #[test_case("earthquakes in the Himalayan region", Some("himalayan"); "qualifiers stripped")]
    #[test_case("earthquakes around Mumbai within 300km last month", Some("mumbai"); "within terminates")]
    #[test_case("earthquakes in New Zealand this week", Some("new zealand"); "multi word location")]
    #[test_case("any big earthquakes lately", None; "no location pattern")]
    #[test_case("show me all seismic events", None; "no preposition")]
    fn test_extract_location(query: &str, expected: Option<&str>) {
        assert_eq!(extract_location(query).as_deref(), expected);
    }

    #[test]
    fn test_extraction_is_case_insensitive_and_folded() {
        assert_eq!(
            extract_location("EARTHQUAKES IN JAPAN").as_deref(),
            Some("japan")
        );
    }

    #[test]
    fn test_qualifier_only_capture_yields_none() {
        assert_eq!(extract_location("earthquakes in the area"), None);
    }
}
