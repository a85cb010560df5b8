//! Field-level coercion helpers for the CSV source.

use chrono::NaiveDate;

/// Parses a record date in the source's `M/D/YYYY` form, also accepting ISO
/// `YYYY-MM-DD`.
#[must_use]
pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(date);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Coerces a count field to a non-negative integer.
///
/// Missing, blank, or non-numeric values become 0; fractional values are
/// truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(s: Option<&str>) -> u64 {
    let Some(s) = s else { return 0 };
    let s = s.trim();
    if let Ok(n) = s.parse::<u64>() {
        return n;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f as u64,
        _ => 0,
    }
}
