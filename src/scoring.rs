// src/scoring.rs
//! Score synthesizer: per-item heat and content-readiness heuristics.
//!
//! Both scores are deterministic functions of the item's own text plus its
//! arrival position, reproducible bit-for-bit for the same inputs.

use once_cell::sync::Lazy;
use regex::Regex;

/// SEO base score before any bonus.
pub const SEO_BASE: i32 = 40;
/// Inclusive clamp bounds for the final SEO score.
pub const SEO_MIN: u8 = 30;
pub const SEO_MAX: u8 = 100;

static RE_TITLE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(how|why|guide|report|update)\b").expect("valid title keyword regex")
});

static RE_SUMMARY_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(defi|layer 2|regulation|funding|token)\b")
        .expect("valid summary keyword regex")
});

/// Heat value for one item.
///
/// Prefers the upstream AI score when it is present, finite and nonzero;
/// otherwise falls back to `batch_size - index`, so earlier items in an
/// unranked batch read as hotter than later ones. Every item ends up with a
/// usable heat value even when the upstream score is missing.
pub fn hot_score(trending_score: Option<f64>, index: usize, batch_size: usize) -> f64 {
    match trending_score {
        Some(s) if s.is_finite() && s != 0.0 => s,
        _ => batch_size.saturating_sub(index) as f64,
    }
}

/// Content-readiness heuristic in [30,100].
///
/// Base 40, plus bonuses for title/summary length bands (both bounds
/// inclusive) and whole-word keyword hits. This measures optimization
/// readiness, not correctness.
pub fn seo_score(title: &str, summary: &str) -> u8 {
    let mut score = SEO_BASE;

    let title_len = title.chars().count();
    if (45..=70).contains(&title_len) {
        score += 20;
    }

    let summary_len = summary.chars().count();
    if (140..=320).contains(&summary_len) {
        score += 25;
    }

    if RE_TITLE_KEYWORDS.is_match(title) {
        score += 5;
    }
    if RE_SUMMARY_KEYWORDS.is_match(summary) {
        score += 5;
    }

    score.clamp(SEO_MIN as i32, SEO_MAX as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_score_prefers_upstream_value() {
        assert_eq!(hot_score(Some(8.0), 0, 10), 8.0);
        assert_eq!(hot_score(Some(0.5), 9, 10), 0.5);
    }

    #[test]
    fn hot_score_falls_back_to_arrival_order() {
        assert_eq!(hot_score(None, 0, 10), 10.0);
        assert_eq!(hot_score(None, 9, 10), 1.0);
        assert_eq!(hot_score(Some(0.0), 2, 5), 3.0);
        assert_eq!(hot_score(Some(f64::NAN), 2, 5), 3.0);
    }

    #[test]
    fn seo_title_length_bounds_are_inclusive() {
        let summary = "";
        assert_eq!(seo_score(&"x".repeat(45), summary), 60);
        assert_eq!(seo_score(&"x".repeat(70), summary), 60);
        assert_eq!(seo_score(&"x".repeat(44), summary), 40);
        assert_eq!(seo_score(&"x".repeat(71), summary), 40);
    }

    #[test]
    fn seo_summary_length_bounds_are_inclusive() {
        let title = "";
        assert_eq!(seo_score(title, &"x".repeat(140)), 65);
        assert_eq!(seo_score(title, &"x".repeat(320)), 65);
        assert_eq!(seo_score(title, &"x".repeat(139)), 40);
        assert_eq!(seo_score(title, &"x".repeat(321)), 40);
    }

    #[test]
    fn keywords_match_whole_words_only() {
        assert_eq!(seo_score("Guide to staking", ""), 45);
        assert_eq!(seo_score("Misguided policy", ""), 40);
        assert_eq!(seo_score("", "new token launched"), 45);
        assert_eq!(seo_score("", "tokenomics deep dive"), 40);
        assert_eq!(seo_score("", "best layer 2 rollups"), 45);
    }

    #[test]
    fn score_depends_only_on_length_and_keyword_presence() {
        // Same char count, same keyword hits, different wording.
        let a = seo_score("why rollup fees keep falling this autumn quarter", "");
        let b = seo_score("report on falling rollup fees as autumn arrives!", "");
        assert_eq!(a, b);
    }

    #[test]
    fn full_bonus_stack_reaches_95() {
        // 45-char title with a keyword; 140-char summary with keywords.
        let title = format!("guide {}", "x".repeat(39));
        assert_eq!(title.chars().count(), 45);
        let summary = format!("token defi {}", "y".repeat(129));
        assert_eq!(summary.chars().count(), 140);
        assert_eq!(seo_score(&title, &summary), 95);
    }
}
