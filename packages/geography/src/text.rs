//! Display-text helpers shared by the map tooltip and stat surfaces.

use dengue_map_case_models::{Metric, Normalization};

/// Returns the unit suffix for a displayed value under the active metric and
/// normalization.
///
/// Fatality is always a percentage regardless of the normalization setting.
#[must_use]
pub const fn suffix_text(normalization: Normalization, metric: Metric) -> &'static str {
    if matches!(metric, Metric::Fatality) {
        return "%";
    }
    match normalization {
        Normalization::Area => " per km\u{b2}",
        Normalization::Population => " per person",
        Normalization::None => "",
    }
}

/// Title-cases every whitespace-separated word: first character uppercased,
/// the rest lowercased.
#[must_use]
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Formats an integer count with thousands separators (`1234567` ->
/// `"1,234,567"`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}
