// src/freshness.rs
//! Temporal normalizer: free-text relative-time strings to canonical
//! minutes-ago, plus the display label going the other way.
//!
//! Both functions are total. Ambiguous or empty input degrades to a fixed
//! default instead of an error, because those defaults shape what users see
//! as "freshness" under missing data.

use once_cell::sync::Lazy;
use regex::Regex;

/// Age assigned to an empty timestamp, and to "yesterday": one day.
pub const AGE_EMPTY_MINUTES: u32 = 1440;
/// Age assigned to text that matches no known pattern: half a day.
pub const AGE_UNKNOWN_MINUTES: u32 = 720;

static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(minutes?|mins?|m|hours?|hrs?|h|days?|d)\b").expect("valid age regex")
});

/// Convert a free-text relative-time string into minutes ago.
///
/// Unit classification is by substring containment, priority
/// minute > hour > day: a matched unit containing "min" (or equal to "m")
/// counts as minutes even when it loosely resembles another unit.
pub fn normalize_age(text: &str) -> u32 {
    if text.trim().is_empty() {
        return AGE_EMPTY_MINUTES;
    }

    let lower = text.to_lowercase();
    if let Some(caps) = RE_AMOUNT_UNIT.captures(&lower) {
        // An amount too large for u32 saturates; an absurdly old claim must
        // stay old, not snap back to "Just now".
        let amount: u32 = caps[1].parse().unwrap_or(u32::MAX);
        let unit = &caps[2];
        return if unit.contains("min") || unit == "m" {
            amount
        } else if unit.contains('h') {
            amount.saturating_mul(60)
        } else {
            amount.saturating_mul(1440)
        };
    }

    if lower.contains("yesterday") {
        AGE_EMPTY_MINUTES
    } else {
        AGE_UNKNOWN_MINUTES
    }
}

/// Render a canonical age as a compact display label.
pub fn format_age(minutes: u32) -> String {
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    // Integer rounding to nearest, matching round(m/60) and round(h/24);
    // saturating so ages near u32::MAX stay total instead of overflowing.
    let hours = minutes.saturating_add(30) / 60;
    if hours < 24 {
        format!("{hours}h ago")
    } else {
        let days = hours.saturating_add(12) / 24;
        format!("{days}d ago")
    }
}
