//! Utility functions

use chrono::NaiveDate;

/// Accepts `#RRGGBB` hex colors, case-insensitive.
pub fn is_valid_hex_color(s: &str) -> bool {
    let s = s.strip_prefix('#').unwrap_or(s);
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Number of calendar days covered by `start..=end`, both ends counted.
///
/// Returns `None` when the range is inverted; the caller decides how to
/// report that, it is never silently corrected.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    if end < start {
        return None;
    }
    Some((end - start).num_days() + 1)
}
