//! Demo that runs both pipelines the way the UI shell would: try the
//! configured backend, degrade to an empty batch on failure, fall back to a
//! built-in sample so there is always something to rank.

use trendpulse::cache::{cache_key, load_snapshot, store_snapshot, MemoryCache};
use trendpulse::config::Settings;
use trendpulse::provider::{fetch_news_or_empty, fetch_trends_or_empty, HttpProvider};
use trendpulse::models::{RawNewsItem, RawTrendItem, Sentiment, VerificationStatus};
use trendpulse::view::{rank_news, rank_trends, CategoryFilter, NewsQuery, NewsSort, SentimentFilter, TrendSort};

fn sample_news() -> Vec<RawNewsItem> {
    let item = |id: &str, title: &str, published: &str, score: Option<f64>, category: &str| {
        RawNewsItem {
            id: id.into(),
            title: title.into(),
            source: "demo-wire".into(),
            published: published.into(),
            summary: format!("{title}. Funding and regulation angles for the token market."),
            trending_score: score,
            engagement: "45.2K".into(),
            verification: VerificationStatus::Verified,
            category: category.into(),
            url: None,
        }
    };

    vec![
        item("n1", "Why layer 2 fees dropped again", "35 min ago", Some(8.4), "Market"),
        item("n2", "DeFi lending report for the quarter", "3 hours ago", None, "Protocol"),
        item("n3", "Regulation update from the EU", "yesterday", Some(6.1), "Regulatory"),
        item("n4", "Funding round closes for rollup startup", "2 days ago", None, "Market"),
    ]
}

fn sample_trends() -> Vec<RawTrendItem> {
    let trend = |rank: u32, keyword: &str, mentions: &str, sentiment: Sentiment, change: f64| {
        RawTrendItem {
            rank,
            keyword: keyword.into(),
            mentions: mentions.into(),
            sentiment,
            change_24h: change,
        }
    };

    vec![
        trend(1, "restaking", "45.2K", Sentiment::Bullish, 12.3),
        trend(2, "etf flows", "38.9K", Sentiment::Neutral, -4.1),
        trend(3, "airdrop season", "32.1K", Sentiment::Bullish, 28.7),
        trend(4, "exchange outage", "28.4K", Sentiment::Bearish, -15.2),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let settings = Settings::from_env()?;
    let backend = HttpProvider::new(&settings.news_endpoint, &settings.trends_endpoint);

    // The default endpoints are unreachable; both fetches degrade to empty
    // and the sample batches take over, same as "render previous state".
    let mut news = fetch_news_or_empty(&backend).await;
    if news.is_empty() {
        news = sample_news();
    }
    let mut trends = fetch_trends_or_empty(&backend).await;
    if trends.is_empty() {
        trends = sample_trends();
    }

    // Round-trip through the cache the way the UI shell would between sessions.
    let cache = MemoryCache::new();
    let key = cache_key(&settings.cache_namespace, &settings.news_endpoint);
    store_snapshot(&cache, &key, news.clone());
    let cached = load_snapshot::<RawNewsItem>(&cache, &key).expect("snapshot parses back");

    for sort in [NewsSort::Recent, NewsSort::Hot, NewsSort::Seo] {
        let query = NewsQuery {
            search: String::new(),
            category: CategoryFilter::All,
            sort,
        };
        println!("-- news / {sort:?}");
        for item in rank_news(&cached.items, &query) {
            println!(
                "  {:>8}  hot={:<5} seo={:<3}  {}",
                item.age_label, item.hot_score, item.seo_score, item.raw.title
            );
        }
    }

    for sort in [TrendSort::Rank, TrendSort::Volume, TrendSort::Move] {
        println!("-- trends / {sort:?}");
        for t in rank_trends(&trends, &SentimentFilter::All, sort) {
            println!("  #{:<2} {:<16} {:>7}  {:+.1}%", t.rank, t.keyword, t.mentions, t.change_24h);
        }
    }

    println!("rank-demo done");
    Ok(())
}
