// src/view.rs
//! View pipelines: annotate → filter → sort for news, filter → sort for
//! trends. Pure over their inputs; each call takes a snapshot and returns a
//! new ordered Vec, so re-running on every parameter change is safe and
//! cheap (O(n log n) per call).

use std::cmp::Ordering;

use tracing::debug;

use crate::freshness::{format_age, normalize_age};
use crate::magnitude::parse_magnitude;
use crate::models::{RankedNewsItem, RawNewsItem, RawTrendItem, Sentiment};
use crate::scoring::{hot_score, seo_score};

/// Category projection for the news view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    fn keeps(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// Sentiment projection for the trends view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentFilter {
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    fn keeps(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(s) => *s == sentiment,
        }
    }
}

/// News ordering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsSort {
    /// Freshest first.
    #[default]
    Recent,
    /// Hottest first, fresher breaks ties.
    Hot,
    /// Highest SEO readiness first, fresher breaks ties.
    Seo,
}

/// Trend ordering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendSort {
    /// Declared rank, ascending.
    #[default]
    Rank,
    /// Parsed mentions magnitude, descending.
    Volume,
    /// Absolute 24h change, descending.
    Move,
}

/// User-selected projection state for the news view. Consumed per call,
/// never retained by the engine.
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    /// Case-insensitive substring match against title and summary.
    pub search: String,
    pub category: CategoryFilter,
    pub sort: NewsSort,
}

/// Annotate one raw item with its derived view fields. `index` is the item's
/// 0-based arrival position; it only seeds the hot-score fallback.
pub fn annotate(raw: &RawNewsItem, index: usize, batch_size: usize) -> RankedNewsItem {
    let freshness_minutes = normalize_age(&raw.published);
    RankedNewsItem {
        freshness_minutes,
        age_label: format_age(freshness_minutes),
        hot_score: hot_score(raw.trending_score, index, batch_size),
        seo_score: seo_score(&raw.title, &raw.summary),
        raw: raw.clone(),
    }
}

/// Run the full news pipeline for one view: annotate every item in arrival
/// order, apply the query's filters, sort by the selected mode.
pub fn rank_news(items: &[RawNewsItem], query: &NewsQuery) -> Vec<RankedNewsItem> {
    let batch_size = items.len();
    let needle = query.search.trim().to_lowercase();

    let mut out: Vec<RankedNewsItem> = items
        .iter()
        .enumerate()
        .map(|(i, raw)| annotate(raw, i, batch_size))
        .filter(|item| query.category.keeps(&item.raw.category))
        .filter(|item| {
            needle.is_empty()
                || item.raw.title.to_lowercase().contains(&needle)
                || item.raw.summary.to_lowercase().contains(&needle)
        })
        .collect();

    out.sort_by(|a, b| match query.sort {
        NewsSort::Recent => a.freshness_minutes.cmp(&b.freshness_minutes),
        NewsSort::Hot => cmp_f64_desc(a.hot_score, b.hot_score)
            .then_with(|| a.freshness_minutes.cmp(&b.freshness_minutes)),
        NewsSort::Seo => b
            .seo_score
            .cmp(&a.seo_score)
            .then_with(|| a.freshness_minutes.cmp(&b.freshness_minutes)),
    });

    debug!(
        total = batch_size,
        kept = out.len(),
        sort = ?query.sort,
        "news view ranked"
    );
    out
}

/// Run the trends pipeline: sentiment filter, then the selected ordering.
pub fn rank_trends(
    items: &[RawTrendItem],
    sentiment: &SentimentFilter,
    sort: TrendSort,
) -> Vec<RawTrendItem> {
    let mut out: Vec<RawTrendItem> = items
        .iter()
        .filter(|t| sentiment.keeps(t.sentiment))
        .cloned()
        .collect();

    out.sort_by(|a, b| match sort {
        TrendSort::Rank => a.rank.cmp(&b.rank),
        TrendSort::Volume => {
            cmp_f64_desc(parse_magnitude(&a.mentions), parse_magnitude(&b.mentions))
                .then_with(|| a.rank.cmp(&b.rank))
        }
        TrendSort::Move => cmp_f64_desc(a.change_24h.abs(), b.change_24h.abs())
            .then_with(|| a.rank.cmp(&b.rank)),
    });

    debug!(total = items.len(), kept = out.len(), sort = ?sort, "trend view ranked");
    out
}

/// Descending comparator over possibly-NaN floats; NaN sorts last.
fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| {
        match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        }
    })
}
