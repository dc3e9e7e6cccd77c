//! Year parsing and the year pickers offered by the forms.

use crate::config::{
    LISTING_NEWEST_YEAR, LISTING_YEAR_OPTIONS, TREND_DEFAULT_END_YEAR, TREND_DEFAULT_START_YEAR,
};

/// Parse the leading integer of `text`, ignoring anything after it.
///
/// Leading whitespace and a single `+`/`-` sign are accepted. Returns `None`
/// when no digits follow, so `"2019 GXR"` is `Some(2019)` and `"any"` is
/// `None`.
///
/// Digit runs outside the `i32` range also give `None`, so such a bound acts
/// as no constraint. A browser's `parseInt` would instead yield a huge number
/// (or `Infinity`) and the comparison would still filter.
pub fn parse_year(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

/// Parse an optional bound; absent, empty, or unparsable text is `None`.
pub fn parse_bound(text: Option<&str>) -> Option<i32> {
    text.filter(|t| !t.is_empty()).and_then(parse_year)
}

/// Years offered by the listing search pickers, newest first.
pub fn listing_years() -> Vec<i32> {
    (0..LISTING_YEAR_OPTIONS as i32)
        .map(|i| LISTING_NEWEST_YEAR - i)
        .collect()
}

/// Years offered by the trend comparison pickers, oldest first.
pub fn trend_years() -> Vec<i32> {
    (TREND_DEFAULT_START_YEAR..=TREND_DEFAULT_END_YEAR).collect()
}
