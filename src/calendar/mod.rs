//! Natural-language calendar resolution.
//!
//! Converts time expressions like "past 5 years", "winter 2023", or
//! "2022-2024" into concrete inclusive date ranges, validated against a
//! source's [`SourceConstraints`] (embargo window and minimum year).
//!
//! Patterns are probed in a fixed priority order and the first match wins:
//!
//! 1. Relative span: `past/last/previous N years/months/weeks/days`
//! 2. Single four-digit year (full match)
//! 3. Year range `YYYY-YYYY`
//! 4. Season plus year (`winter 2023`); a season without a year is an
//!    error, not a guess
//!
//! Validity violations produce dedicated error kinds and are never
//! silently clamped.

use crate::models::{ResolvedDateRange, Season, SourceConstraints, SpanAnchor, SpanUnit,
    TimeExpression};
use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};

mod patterns {
    //! Static regex probes for expression classification.
    // Allow expect() on static regex patterns - these are guaranteed to compile
    #![allow(clippy::expect_used)]

    use regex::Regex;
    use std::sync::LazyLock;

    /// `past/last/previous N unit` with anchor, count, and unit captures.
    pub static RELATIVE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\b(past|last|previous)\s+(\d+)\s+(year|month|week|day)s?\b")
            .expect("static regex: relative span")
    });

    /// A bare four-digit year, nothing else in the expression.
    pub static SINGLE_YEAR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\s*(\d{4})\s*$").expect("static regex: single year"));

    /// `YYYY-YYYY` year range.
    pub static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\b(\d{4})\s*-\s*(\d{4})\b").expect("static regex: year range")
    });

    /// Season word with an optional trailing year.
    pub static SEASON: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\b(winter|spring|summer|autumn|fall)\b(?:\s+(?:of\s+)?(\d{4}))?")
            .expect("static regex: season")
    });
}

/// Classifies a time expression without resolving it.
///
/// Matching is case-insensitive (the text is folded before probing).
/// Returns [`TimeExpression::Unrecognized`] when nothing matches.
///
/// # Errors
///
/// Returns [`Error::AmbiguousSeason`] when a season word appears without a
/// year.
pub fn classify(expression: &str) -> Result<TimeExpression> {
    let text = expression.to_lowercase();

    if let Some(caps) = patterns::RELATIVE_SPAN.captures(&text) {
        let anchor = SpanAnchor::parse(&caps[1]);
        let count: Option<u32> = caps[2].parse().ok();
        let unit = SpanUnit::parse(&caps[3]);
        if let (Some(anchor), Some(count), Some(unit)) = (anchor, count, unit) {
            return Ok(TimeExpression::RelativeSpan {
                unit,
                count,
                anchor,
            });
        }
    }

    if let Some(caps) = patterns::SINGLE_YEAR.captures(&text)
        && let Ok(year) = caps[1].parse::<i32>()
    {
        return Ok(TimeExpression::CalendarYear { year });
    }

    if let Some(caps) = patterns::YEAR_RANGE.captures(&text)
        && let (Ok(start_year), Ok(end_year)) = (caps[1].parse::<i32>(), caps[2].parse::<i32>())
    {
        return Ok(TimeExpression::CalendarYearRange {
            start_year,
            end_year,
        });
    }

    if let Some(caps) = patterns::SEASON.captures(&text) {
        let Some(name) = Season::parse(&caps[1]) else {
            return Ok(TimeExpression::Unrecognized);
        };
        return match caps.get(2).map(|m| m.as_str().parse::<i32>()) {
            Some(Ok(year)) => Ok(TimeExpression::Season { name, year }),
            _ => Err(Error::AmbiguousSeason {
                season: caps[1].to_string(),
            }),
        };
    }

    Ok(TimeExpression::Unrecognized)
}

/// Resolves a natural-language time expression into a concrete date range.
///
/// `constraints` carries the source-specific embargo window and minimum
/// supported year; the arithmetic itself is source-agnostic.
///
/// # Errors
///
/// - [`Error::UnparseableTimePeriod`] when no temporal pattern matches
/// - [`Error::AmbiguousSeason`] for a season word without a year
/// - [`Error::InvalidInput`] for inverted ranges (`start > end`)
/// - [`Error::TooRecent`] when the end date falls inside the embargo
/// - [`Error::TooOld`] when the start year predates the source epoch
pub fn resolve_date_range(
    expression: &str,
    reference_date: NaiveDate,
    constraints: SourceConstraints,
) -> Result<ResolvedDateRange> {
    let parsed = classify(expression)?;
    tracing::debug!(expression, ?parsed, "classified time expression");

    let range = match parsed {
        TimeExpression::RelativeSpan { unit, count, .. } => {
            resolve_relative_span(unit, count, reference_date, constraints)?
        },
        TimeExpression::CalendarYear { year } => ResolvedDateRange::new(
            ymd(year, 1, 1)?,
            ymd(year, 12, 31)?,
        ),
        TimeExpression::CalendarYearRange {
            start_year,
            end_year,
        } => ResolvedDateRange::new(ymd(start_year, 1, 1)?, ymd(end_year, 12, 31)?),
        TimeExpression::Season { name, year } => resolve_season(name, year)?,
        TimeExpression::Unrecognized => {
            return Err(Error::UnparseableTimePeriod {
                expression: expression.to_string(),
            });
        },
    };

    validate(range, reference_date, constraints)?;
    Ok(range)
}

/// Resolves a `past/last/previous N unit` span ending at the embargo edge.
fn resolve_relative_span(
    unit: SpanUnit,
    count: u32,
    reference_date: NaiveDate,
    constraints: SourceConstraints,
) -> Result<ResolvedDateRange> {
    let end = constraints.latest_available(reference_date);
    let embargo = i64::from(constraints.embargo_days);

    let span_overflow = || Error::InvalidInput("span count out of calendar range".to_string());

    let start = match unit {
        SpanUnit::Year => {
            let year = i32::try_from(count)
                .ok()
                .and_then(|n| reference_date.year().checked_sub(n))
                .ok_or_else(span_overflow)?;
            ymd(year, 1, 1)?
        },
        SpanUnit::Month => {
            // Walk back N months from the reference month, borrowing years
            // on underflow via a flat month index.
            let month0 = i64::from(reference_date.month0());
            let total = i64::from(reference_date.year()) * 12 + month0 - i64::from(count);
            let year = i32::try_from(total.div_euclid(12))
                .map_err(|_| Error::InvalidInput("month span out of calendar range".to_string()))?;
            let month = u32::try_from(total.rem_euclid(12) + 1)
                .map_err(|_| Error::InvalidInput("month span out of calendar range".to_string()))?;
            ymd(year, month, 1)?
        },
        SpanUnit::Week => reference_date
            .checked_sub_signed(Duration::days(i64::from(count) * 7 + embargo))
            .ok_or_else(span_overflow)?,
        SpanUnit::Day => reference_date
            .checked_sub_signed(Duration::days(i64::from(count) + embargo))
            .ok_or_else(span_overflow)?,
    };

    Ok(ResolvedDateRange::new(start, end))
}

/// Fixed season windows. Winter deliberately ends on Feb 28 of the
/// following year regardless of leap years.
fn resolve_season(name: Season, year: i32) -> Result<ResolvedDateRange> {
    let range = match name {
        Season::Winter => ResolvedDateRange::new(ymd(year, 12, 1)?, ymd(year + 1, 2, 28)?),
        Season::Spring => ResolvedDateRange::new(ymd(year, 3, 1)?, ymd(year, 5, 31)?),
        Season::Summer => ResolvedDateRange::new(ymd(year, 6, 1)?, ymd(year, 8, 31)?),
        Season::Autumn => ResolvedDateRange::new(ymd(year, 9, 1)?, ymd(year, 11, 30)?),
    };
    Ok(range)
}

/// Validates a computed range against ordering and source constraints.
fn validate(
    range: ResolvedDateRange,
    reference_date: NaiveDate,
    constraints: SourceConstraints,
) -> Result<()> {
    if range.start_date > range.end_date {
        return Err(Error::InvalidInput(format!(
            "start date {} is after end date {}",
            range.start_date, range.end_date
        )));
    }

    let latest_available = constraints.latest_available(reference_date);
    if range.end_date > latest_available {
        return Err(Error::TooRecent {
            end: range.end_date,
            latest_available,
        });
    }

    if range.start_date.year() < constraints.min_year {
        return Err(Error::TooOld {
            year: range.start_date.year(),
            min_year: constraints.min_year,
        });
    }

    Ok(())
}

/// Builds a date, mapping out-of-range components to `InvalidInput`.
fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::InvalidInput(format!("date {year:04}-{month:02}-{day:02} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ARCHIVE: SourceConstraints = SourceConstraints::historical_archive();

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn reference() -> NaiveDate {
        d(2025, 6, 20)
    }

    #[test]
    fn test_classify_relative_span() {
        let expr = classify("past 5 years").unwrap();
        assert_eq!(
            expr,
            TimeExpression::RelativeSpan {
                unit: SpanUnit::Year,
                count: 5,
                anchor: SpanAnchor::Past,
            }
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let expr = classify("Past 3 Months").unwrap();
        assert!(matches!(
            expr,
            TimeExpression::RelativeSpan {
                unit: SpanUnit::Month,
                count: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_single_year_requires_full_match() {
        assert_eq!(
            classify("2023").unwrap(),
            TimeExpression::CalendarYear { year: 2023 }
        );
        // "2023 or so" is not a bare year, and matches nothing else either
        assert_eq!(classify("2023 or so").unwrap(), TimeExpression::Unrecognized);
    }

    #[test]
    fn test_classify_year_range() {
        assert_eq!(
            classify("2022-2024").unwrap(),
            TimeExpression::CalendarYearRange {
                start_year: 2022,
                end_year: 2024,
            }
        );
    }

    #[test]
    fn test_classify_season_with_year() {
        assert_eq!(
            classify("winter 2023").unwrap(),
            TimeExpression::Season {
                name: Season::Winter,
                year: 2023,
            }
        );
        assert_eq!(
            classify("fall of 2021").unwrap(),
            TimeExpression::Season {
                name: Season::Autumn,
                year: 2021,
            }
        );
    }

    #[test]
    fn test_classify_season_without_year_is_ambiguous() {
        let err = classify("winter").unwrap_err();
        assert!(matches!(err, Error::AmbiguousSeason { season } if season == "winter"));
    }

    #[test]
    fn test_resolve_past_five_years_boundary() {
        let range = resolve_date_range("past 5 years", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2020, 1, 1));
        assert_eq!(range.end_date, d(2025, 6, 15));
    }

    #[test]
    fn test_resolve_month_span_walks_back_across_year() {
        let range = resolve_date_range("last 6 months", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2024, 12, 1));
        assert_eq!(range.end_date, d(2025, 6, 15));

        let range = resolve_date_range("last 3 months", d(2025, 2, 10), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2024, 11, 1));

        let range = resolve_date_range("past 12 months", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2024, 6, 1));
    }

    #[test]
    fn test_resolve_day_and_week_spans_offset_by_embargo() {
        let range = resolve_date_range("past 30 days", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2025, 5, 16));
        assert_eq!(range.end_date, d(2025, 6, 15));

        let range = resolve_date_range("last 2 weeks", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2025, 6, 1));
        assert_eq!(range.end_date, d(2025, 6, 15));
    }

    #[test]
    fn test_resolve_single_year() {
        let range = resolve_date_range("2024", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2024, 1, 1));
        assert_eq!(range.end_date, d(2024, 12, 31));
    }

    #[test]
    fn test_resolve_year_range() {
        let range = resolve_date_range("2022-2024", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2022, 1, 1));
        assert_eq!(range.end_date, d(2024, 12, 31));
    }

    #[test]
    fn test_inverted_year_range_rejected_downstream() {
        let err = resolve_date_range("2024-2022", reference(), ARCHIVE).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test_case("winter 2023", d(2023, 12, 1), d(2024, 2, 28); "winter spans the year boundary")]
    #[test_case("spring 2023", d(2023, 3, 1), d(2023, 5, 31); "spring")]
    #[test_case("summer 2022", d(2022, 6, 1), d(2022, 8, 31); "summer")]
    #[test_case("autumn 2021", d(2021, 9, 1), d(2021, 11, 30); "autumn")]
    #[test_case("fall 2021", d(2021, 9, 1), d(2021, 11, 30); "fall synonym")]
    fn test_resolve_seasons(expr: &str, start: NaiveDate, end: NaiveDate) {
        let range = resolve_date_range(expr, reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, start);
        assert_eq!(range.end_date, end);
    }

    #[test]
    fn test_winter_ignores_leap_day() {
        // 2024 is a leap year but the window still ends Feb 28
        let range = resolve_date_range("winter 2023", reference(), ARCHIVE).unwrap();
        assert_eq!(range.end_date, d(2024, 2, 28));
    }

    #[test]
    fn test_current_year_violates_embargo() {
        let err = resolve_date_range("2025", reference(), ARCHIVE).unwrap_err();
        assert!(matches!(
            err,
            Error::TooRecent {
                latest_available, ..
            } if latest_available == d(2025, 6, 15)
        ));
    }

    #[test]
    fn test_epoch_year_allowed_one_earlier_rejected() {
        let range = resolve_date_range("1940", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(1940, 1, 1));
        assert_eq!(range.end_date, d(1940, 12, 31));

        let err = resolve_date_range("1939", reference(), ARCHIVE).unwrap_err();
        assert!(matches!(
            err,
            Error::TooOld {
                year: 1939,
                min_year: 1940,
            }
        ));
    }

    #[test]
    fn test_unrecognized_expression() {
        let err = resolve_date_range("sometime nice", reference(), ARCHIVE).unwrap_err();
        assert!(
            matches!(err, Error::UnparseableTimePeriod { expression } if expression == "sometime nice")
        );
    }

    #[test]
    fn test_unconstrained_source_accepts_recent_dates() {
        let range =
            resolve_date_range("past 7 days", reference(), SourceConstraints::unconstrained())
                .unwrap();
        assert_eq!(range.end_date, reference());
        assert_eq!(range.start_date, d(2025, 6, 13));
    }

    #[test]
    fn test_relative_span_beats_year_range_in_priority() {
        // Contains both a relative span and a year range; the relative
        // span wins because it is probed first.
        let range = resolve_date_range("past 2 years 2022-2024", reference(), ARCHIVE).unwrap();
        assert_eq!(range.start_date, d(2023, 1, 1));
        assert_eq!(range.end_date, d(2025, 6, 15));
    }
}
