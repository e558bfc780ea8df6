//! Temporal types for natural-language date range resolution.
//!
//! A free-text time expression is first categorized into a [`TimeExpression`]
//! and then resolved against a reference date and a set of
//! [`SourceConstraints`] into a concrete, inclusive [`ResolvedDateRange`].
//!
//! # Validity Constraints
//!
//! Historical data sources typically have two hard limits:
//!
//! | Constraint | Meaning | Example |
//! |------------|---------|---------|
//! | **Embargo** | Trailing window before "now" with no data yet | archive lags 5 days |
//! | **Epoch** | Earliest year the source covers | archive starts 1940 |
//!
//! Violations are reported as dedicated errors, never silently clamped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a relative time span ("past 3 months").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanUnit {
    /// Calendar days.
    Day,
    /// Seven-day weeks.
    Week,
    /// Calendar months.
    Month,
    /// Calendar years.
    Year,
}

impl SpanUnit {
    /// Parses a unit word (singular or plural).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim_end_matches('s') {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// The anchor word that introduced a relative span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanAnchor {
    /// "past N ..."
    Past,
    /// "last N ..."
    Last,
    /// "previous N ..."
    Previous,
}

impl SpanAnchor {
    /// Parses an anchor word.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "past" => Some(Self::Past),
            "last" => Some(Self::Last),
            "previous" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// A season named in a time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Dec 1 of the given year through Feb 28 of the next.
    Winter,
    /// Mar 1 through May 31.
    Spring,
    /// Jun 1 through Aug 31.
    Summer,
    /// Sep 1 through Nov 30. "fall" is accepted as a synonym.
    Autumn,
}

impl Season {
    /// Parses a season word.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        };
        write!(f, "{name}")
    }
}

/// A categorized natural-language time expression.
///
/// Constructed once per parse call, immutable, discarded after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeExpression {
    /// A span phrased relative to the reference date ("past 3 months").
    RelativeSpan {
        /// The span unit.
        unit: SpanUnit,
        /// Number of units to walk back.
        count: u32,
        /// The anchor word that introduced the span.
        anchor: SpanAnchor,
    },
    /// A single four-digit calendar year ("2023").
    CalendarYear {
        /// The year.
        year: i32,
    },
    /// A year range ("2022-2024"). The parser does not enforce ordering;
    /// resolution validates `start <= end`.
    CalendarYearRange {
        /// First year of the range.
        start_year: i32,
        /// Second year of the range.
        end_year: i32,
    },
    /// A season with an explicit year ("winter 2023").
    Season {
        /// The season.
        name: Season,
        /// The year anchoring the season.
        year: i32,
    },
    /// No temporal pattern matched.
    Unrecognized,
}

/// A resolved, inclusive calendar date range.
///
/// Invariant: `start_date <= end_date`. For embargoed sources the resolver
/// additionally guarantees `end_date <= reference - embargo` and
/// `start_date.year >= min_year` before handing a range out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedDateRange {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl ResolvedDateRange {
    /// Creates a range without validation.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a date falls inside the range (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for ResolvedDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

/// Validity constraints of a historical data source.
///
/// Passed to the calendar resolver by the caller; the resolver itself is
/// generic calendar arithmetic and hardcodes nothing source-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConstraints {
    /// Trailing days before the reference date with no data available.
    pub embargo_days: u32,
    /// Earliest year the source serves data for.
    pub min_year: i32,
}

impl SourceConstraints {
    /// Creates constraints from raw values.
    #[must_use]
    pub const fn new(embargo_days: u32, min_year: i32) -> Self {
        Self {
            embargo_days,
            min_year,
        }
    }

    /// Constraints of the historical weather archive: data lags five days
    /// behind real time and goes back to 1940.
    #[must_use]
    pub const fn historical_archive() -> Self {
        Self::new(5, 1940)
    }

    /// Unconstrained source (no embargo, effectively no epoch).
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self::new(0, i32::MIN)
    }

    /// The most recent date this source can serve, given a reference date.
    #[must_use]
    pub fn latest_available(&self, reference: NaiveDate) -> NaiveDate {
        reference - chrono::Duration::days(i64::from(self.embargo_days))
    }
}
