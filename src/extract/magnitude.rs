//! Magnitude-threshold extraction from free text.

use super::patterns::{MAGNITUDE_RULES, MagnitudeValue};

/// Extracts a minimum-magnitude threshold from a query.
///
/// Numeric patterns ("magnitude 5+", "stronger than 6") are checked
/// before the qualitative words, so "significant magnitude 7+ earthquake"
/// yields 7.0, not the 4.5 that "significant" alone would produce.
///
/// Qualitative thresholds: significant = 4.5, major = 6.0, minor = 2.0.
#[must_use]
pub fn extract_magnitude(text: &str) -> Option<f64> {
    let folded = text.to_lowercase();

    for rule in MAGNITUDE_RULES.iter() {
        let Some(caps) = rule.pattern.captures(&folded) else {
            continue;
        };
        let threshold = match rule.value {
            MagnitudeValue::Captured => caps.get(1)?.as_str().parse().ok()?,
            MagnitudeValue::Fixed(threshold) => threshold,
        };
        tracing::trace!(threshold, "extracted magnitude threshold");
        return Some(threshold);
    }

    None
}
