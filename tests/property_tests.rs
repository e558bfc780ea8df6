//! Property-based tests for calendar resolution and extraction.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Relative year spans always start on January 1
//! - Trailing-window lengths are exact
//! - Bare years resolve to full calendar years
//! - Extractors never panic on arbitrary text
//! - Bounding boxes contain their own centroid

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{Datelike, NaiveDate};
use geoquery::models::{BoundingBox, SourceConstraints};
use geoquery::{
    extract_days, extract_location, extract_magnitude, extract_radius_km, resolve_date_range,
};
use proptest::prelude::*;

const ARCHIVE: SourceConstraints = SourceConstraints::historical_archive();

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

proptest! {
    /// Property: "past N years" starts on Jan 1 of (reference year - N)
    /// and ends at the embargo edge, for every N that stays inside the
    /// supported era.
    #[test]
    fn prop_past_n_years_starts_on_january_first(n in 1u32..=85) {
        let range = resolve_date_range(&format!("past {n} years"), reference(), ARCHIVE).unwrap();
        prop_assert_eq!(range.start_date.year(), 2025 - i32::try_from(n).unwrap());
        prop_assert_eq!(range.start_date.month(), 1);
        prop_assert_eq!(range.start_date.day(), 1);
        prop_assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    /// Property: "past N days" produces an inclusive window of exactly
    /// N + 1 days ending at the embargo edge.
    #[test]
    fn prop_past_n_days_window_is_exact(n in 1i64..=3650) {
        let range =
            resolve_date_range(&format!("past {n} days"), reference(), ARCHIVE).unwrap();
        prop_assert_eq!(range.len_days(), n + 1);
        prop_assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    /// Property: a bare year resolves to the full calendar year.
    #[test]
    fn prop_bare_year_resolves_to_full_year(year in 1940i32..=2024) {
        let range = resolve_date_range(&year.to_string(), reference(), ARCHIVE).unwrap();
        prop_assert_eq!(range.start_date, NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
        prop_assert_eq!(range.end_date, NaiveDate::from_ymd_opt(year, 12, 31).unwrap());
        prop_assert!(range.contains(NaiveDate::from_ymd_opt(year, 7, 1).unwrap()));
    }

    /// Property: extractors never panic on arbitrary text, and a
    /// location, when found, is already folded and trimmed.
    #[test]
    fn prop_extractors_tolerate_arbitrary_text(text in ".{0,200}") {
        let _ = extract_days(&text);
        if let Some(location) = extract_location(&text) {
            prop_assert!(!location.is_empty());
            prop_assert_eq!(location.to_lowercase(), location.clone());
        }
        let _ = extract_magnitude(&text);
        let _ = extract_radius_km(&text);
    }

    /// Property: a box built around a centroid contains that centroid.
    #[test]
    fn prop_box_contains_its_centroid(
        lat in -80.0f64..80.0,
        lon in -170.0f64..170.0,
        pad in 0.1f64..10.0,
    ) {
        let bbox = BoundingBox::around(lat, lon, pad);
        prop_assert!(bbox.contains(lat, lon));
        prop_assert!(!bbox.wraps_antimeridian());
    }

    /// Property: formatting a resolved year range back to its expression
    /// form and re-resolving yields the same range.
    #[test]
    fn prop_year_expressions_round_trip(start in 1940i32..=2020, span in 0i32..=4) {
        let end = start + span;
        let expr = if start == end {
            start.to_string()
        } else {
            format!("{start}-{end}")
        };
        let first = resolve_date_range(&expr, reference(), ARCHIVE).unwrap();
        let rendered = if first.start_date.year() == first.end_date.year() {
            first.start_date.year().to_string()
        } else {
            format!("{}-{}", first.start_date.year(), first.end_date.year())
        };
        let second = resolve_date_range(&rendered, reference(), ARCHIVE).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: resolution is deterministic for a fixed reference date.
    #[test]
    fn prop_resolution_is_deterministic(n in 1u32..=24) {
        let expr = format!("last {n} months");
        let first = resolve_date_range(&expr, reference(), ARCHIVE).unwrap();
        let second = resolve_date_range(&expr, reference(), ARCHIVE).unwrap();
        prop_assert_eq!(first, second);
    }
}
