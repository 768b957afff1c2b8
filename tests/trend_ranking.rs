// tests/trend_ranking.rs
//
// Trend view pipeline: sentiment filter plus rank/volume/move orderings,
// including order-independence of the sorted result.

use rand::seq::SliceRandom;
use trendpulse::models::{RawTrendItem, Sentiment};
use trendpulse::view::{rank_trends, SentimentFilter, TrendSort};

fn trend(rank: u32, keyword: &str, mentions: &str, sentiment: Sentiment, change: f64) -> RawTrendItem {
    RawTrendItem {
        rank,
        keyword: keyword.into(),
        mentions: mentions.into(),
        sentiment,
        change_24h: change,
    }
}

fn sample() -> Vec<RawTrendItem> {
    vec![
        trend(1, "restaking", "45.2K", Sentiment::Bullish, 12.3),
        trend(2, "etf flows", "38.9K", Sentiment::Neutral, -4.1),
        trend(3, "airdrops", "32.1K", Sentiment::Bullish, 28.7),
        trend(4, "outage", "28.4K", Sentiment::Bearish, -15.2),
    ]
}

#[test]
fn rank_sort_ascends_declared_rank() {
    let mut input = sample();
    input.reverse();
    let out = rank_trends(&input, &SentimentFilter::All, TrendSort::Rank);
    let ranks: Vec<u32> = out.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn volume_sort_keeps_already_descending_input() {
    let input = sample();
    let out = rank_trends(&input, &SentimentFilter::All, TrendSort::Volume);
    let keywords: Vec<&str> = out.iter().map(|t| t.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["restaking", "etf flows", "airdrops", "outage"]);
}

#[test]
fn volume_sort_is_input_order_independent() {
    let expected = rank_trends(&sample(), &SentimentFilter::All, TrendSort::Volume);

    let mut reversed = sample();
    reversed.reverse();
    assert_eq!(rank_trends(&reversed, &SentimentFilter::All, TrendSort::Volume), expected);

    let mut rng = rand::rng();
    for _ in 0..10 {
        let mut shuffled = sample();
        shuffled.shuffle(&mut rng);
        assert_eq!(
            rank_trends(&shuffled, &SentimentFilter::All, TrendSort::Volume),
            expected
        );
    }
}

#[test]
fn move_sort_uses_absolute_change() {
    let out = rank_trends(&sample(), &SentimentFilter::All, TrendSort::Move);
    let keywords: Vec<&str> = out.iter().map(|t| t.keyword.as_str()).collect();
    // 28.7, -15.2, 12.3, -4.1 by magnitude.
    assert_eq!(keywords, vec!["airdrops", "outage", "restaking", "etf flows"]);
}

#[test]
fn sentiment_filter_keeps_only_matches() {
    let out = rank_trends(
        &sample(),
        &SentimentFilter::Only(Sentiment::Bullish),
        TrendSort::Rank,
    );
    let keywords: Vec<&str> = out.iter().map(|t| t.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["restaking", "airdrops"]);
}

#[test]
fn volume_ties_break_by_rank() {
    let input = vec![
        trend(7, "late", "10K", Sentiment::Neutral, 0.0),
        trend(2, "early", "10K", Sentiment::Neutral, 0.0),
    ];
    let out = rank_trends(&input, &SentimentFilter::All, TrendSort::Volume);
    let ranks: Vec<u32> = out.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, vec![2, 7]);
}

#[test]
fn malformed_mentions_sort_last_on_volume() {
    let input = vec![
        trend(1, "garbled", "no data", Sentiment::Neutral, 0.0),
        trend(2, "real", "5K", Sentiment::Neutral, 0.0),
    ];
    let out = rank_trends(&input, &SentimentFilter::All, TrendSort::Volume);
    assert_eq!(out[0].keyword, "real");
    assert_eq!(out[1].keyword, "garbled"); // parsed as 0, not an error
}
