//! Day-count extraction from free text.

use super::patterns::{DAY_RULES, DayValue};

/// Extracts a trailing-window day count from a query.
///
/// Rules are tried in table order and the first match wins: explicit
/// counts ("last 14 days") before fixed windows ("last week" = 7, "last
/// month" = 30, "recent" = 14). Returns `None` when nothing temporal is
/// mentioned.
#[must_use]
pub fn extract_days(text: &str) -> Option<u32> {
    let folded = text.to_lowercase();

    for rule in DAY_RULES.iter() {
        let Some(caps) = rule.pattern.captures(&folded) else {
            continue;
        };
        let days = match rule.value {
            DayValue::CapturedDays => caps.get(1)?.as_str().parse().ok()?,
            DayValue::CapturedWeeks => caps.get(1)?.as_str().parse::<u32>().ok()?.checked_mul(7)?,
            DayValue::Fixed(days) => days,
        };
        tracing::trace!(days, "extracted day count");
        return Some(days);
    }

    None
}
