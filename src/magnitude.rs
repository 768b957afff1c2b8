// src/magnitude.rs
//! Magnitude parser: free-text counts like "45.2K", "1.2M", "12,345" to
//! canonical numbers. One shared routine for news engagement and trend
//! mentions; both call sites must stay on this function.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid magnitude regex"));

/// Parse a free-text magnitude string into a non-negative value.
///
/// The first numeric token wins; a "k"/"K" anywhere in the text scales by
/// a thousand, otherwise an "m"/"M" scales by a million. No numeric token
/// means 0.
pub fn parse_magnitude(text: &str) -> f64 {
    let cleaned = text.replace(',', "");
    let Some(m) = RE_NUMBER.find(&cleaned) else {
        return 0.0;
    };
    let value: f64 = m.as_str().parse().unwrap_or(0.0);

    let lower = text.to_lowercase();
    if lower.contains('k') {
        value * 1_000.0
    } else if lower.contains('m') {
        value * 1_000_000.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_scale() {
        assert_eq!(parse_magnitude("45.2K"), 45_200.0);
        assert_eq!(parse_magnitude("38.9k"), 38_900.0);
        assert_eq!(parse_magnitude("1.2M"), 1_200_000.0);
    }

    #[test]
    fn k_wins_when_both_letters_appear() {
        // "K mentions" carries both a k and an m; k takes priority.
        assert_eq!(parse_magnitude("45.2K mentions"), 45_200.0);
    }

    #[test]
    fn plain_and_comma_separated_numbers() {
        assert_eq!(parse_magnitude("12,345"), 12_345.0);
        assert_eq!(parse_magnitude("987"), 987.0);
    }

    #[test]
    fn no_numeric_token_is_zero() {
        assert_eq!(parse_magnitude("no data"), 0.0);
        assert_eq!(parse_magnitude(""), 0.0);
    }
}
