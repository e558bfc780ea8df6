//! Static rule tables for entity extraction.
//!
//! Every extractor walks its table in order and stops at the first
//! matching rule. The tables are ordered deliberately: reordering them
//! changes extraction results (numeric magnitude rules must precede the
//! qualitative words, explicit day counts must precede the fixed-window
//! words).
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// How a day-count rule produces its value.
#[derive(Debug, Clone, Copy)]
pub enum DayValue {
    /// Take the captured number as days.
    CapturedDays,
    /// Take the captured number as weeks (multiplied by seven).
    CapturedWeeks,
    /// A fixed day count.
    Fixed(u32),
}

/// A day-count extraction rule.
#[derive(Debug)]
pub struct DayRule {
    /// The regex pattern to match.
    pub pattern: Regex,
    /// How to turn the match into a day count.
    pub value: DayValue,
}

/// How a magnitude rule produces its value.
#[derive(Debug, Clone, Copy)]
pub enum MagnitudeValue {
    /// Take the captured number literally.
    Captured,
    /// A fixed threshold for a qualitative word.
    Fixed(f64),
}

/// A magnitude-threshold extraction rule.
#[derive(Debug)]
pub struct MagnitudeRule {
    /// The regex pattern to match.
    pub pattern: Regex,
    /// How to turn the match into a threshold.
    pub value: MagnitudeValue,
}

/// A radius extraction rule.
#[derive(Debug)]
pub struct RadiusRule {
    /// The regex pattern to match; group 1 captures the number.
    pub pattern: Regex,
    /// Whether the captured number is in miles (converted to km).
    pub miles: bool,
}

/// Location capture patterns, probed in order.
///
/// Group 1 captures the location phrase. A phrase ends at the next
/// temporal or spatial keyword, at punctuation, or at the end of input;
/// a second preposition also terminates it ("near tokyo in the past
/// week" captures only "tokyo").
pub static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"\b(?:in|near|around)\s+([a-z][a-z\s]*?)(?:\s+(?:last|past|this|during|within|over|today|yesterday|recently|recent|in|near|around)\b|[.,!?;]|$)",
        )
        .expect("static regex: prepositional location"),
        Regex::new(
            r"\b(?:earthquakes|seismic|activity)\s+(?:in|near|around)\s+([a-z][a-z\s]*?)(?:\s+(?:last|past|this|during|within|over|today|yesterday|recently|recent)\b|[.,!?;]|$)",
        )
        .expect("static regex: topical location"),
    ]
});

/// Qualifier words stripped from a captured location phrase.
pub static LOCATION_QUALIFIERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["the", "area", "region"].into_iter().collect());

/// Day-count rules, probed in order.
pub static DAY_RULES: LazyLock<Vec<DayRule>> = LazyLock::new(|| {
    vec![
        DayRule {
            pattern: Regex::new(r"\b(?:last|past)\s+(\d+)\s+days?\b")
                .expect("static regex: last N days"),
            value: DayValue::CapturedDays,
        },
        DayRule {
            pattern: Regex::new(r"\b(\d+)\s+days?\b").expect("static regex: N days"),
            value: DayValue::CapturedDays,
        },
        DayRule {
            pattern: Regex::new(r"\b(?:last|past|this)\s+week\b")
                .expect("static regex: last week"),
            value: DayValue::Fixed(7),
        },
        DayRule {
            pattern: Regex::new(r"\b(?:last|past|this)\s+month\b")
                .expect("static regex: last month"),
            value: DayValue::Fixed(30),
        },
        DayRule {
            pattern: Regex::new(r"\b(?:last|past)\s+(\d+)\s+weeks?\b")
                .expect("static regex: last N weeks"),
            value: DayValue::CapturedWeeks,
        },
        DayRule {
            pattern: Regex::new(r"\btoday\b").expect("static regex: today"),
            value: DayValue::Fixed(1),
        },
        DayRule {
            pattern: Regex::new(r"\byesterday\b").expect("static regex: yesterday"),
            value: DayValue::Fixed(2),
        },
        DayRule {
            pattern: Regex::new(r"\brecent\b").expect("static regex: recent"),
            value: DayValue::Fixed(14),
        },
    ]
});

/// Magnitude rules, probed in order. Numeric patterns come first so a
/// qualitative word never shadows an explicit number.
pub static MAGNITUDE_RULES: LazyLock<Vec<MagnitudeRule>> = LazyLock::new(|| {
    vec![
        MagnitudeRule {
            pattern: Regex::new(r"\bmagnitude\s+(\d+(?:\.\d+)?)\s*\+?")
                .expect("static regex: magnitude N"),
            value: MagnitudeValue::Captured,
        },
        MagnitudeRule {
            pattern: Regex::new(r"\b(?:above|over|greater\s+than)\s+(?:magnitude\s+)?(\d+(?:\.\d+)?)\b")
                .expect("static regex: above magnitude N"),
            value: MagnitudeValue::Captured,
        },
        MagnitudeRule {
            pattern: Regex::new(r"\bstronger\s+than\s+(?:magnitude\s+)?(\d+(?:\.\d+)?)\b")
                .expect("static regex: stronger than N"),
            value: MagnitudeValue::Captured,
        },
        MagnitudeRule {
            pattern: Regex::new(r"\b(\d+(?:\.\d+)?)\s*\+\s*(?:magnitude|earthquakes?|quakes?|events?)\b")
                .expect("static regex: N+ earthquakes"),
            value: MagnitudeValue::Captured,
        },
        MagnitudeRule {
            pattern: Regex::new(r"\bsignificant\b").expect("static regex: significant"),
            value: MagnitudeValue::Fixed(4.5),
        },
        MagnitudeRule {
            pattern: Regex::new(r"\bmajor\b").expect("static regex: major"),
            value: MagnitudeValue::Fixed(6.0),
        },
        MagnitudeRule {
            pattern: Regex::new(r"\bminor\b").expect("static regex: minor"),
            value: MagnitudeValue::Fixed(2.0),
        },
    ]
});

/// Radius rules, probed in order. Kilometer patterns precede the mile
/// pattern; miles are converted with the 1.60934 factor.
pub static RADIUS_RULES: LazyLock<Vec<RadiusRule>> = LazyLock::new(|| {
    vec![
        RadiusRule {
            pattern: Regex::new(r"\bwithin\s+(\d+)\s*(?:km|kilometers?)\b")
                .expect("static regex: within N km"),
            miles: false,
        },
        RadiusRule {
            pattern: Regex::new(r"\b(\d+)\s*km\s+radius\b").expect("static regex: N km radius"),
            miles: false,
        },
        RadiusRule {
            pattern: Regex::new(r"\b(\d+)\s*kilometers?\b").expect("static regex: N kilometers"),
            miles: false,
        },
        RadiusRule {
            pattern: Regex::new(r"\bwithin\s+(\d+)\s*miles?\b")
                .expect("static regex: within N miles"),
            miles: true,
        },
    ]
});
