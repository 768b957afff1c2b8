// src/lib.rs
// Public library surface for the UI shell and integration tests.

pub mod briefing;
pub mod cache;
pub mod config;
pub mod freshness;
pub mod magnitude;
pub mod models;
pub mod provider;
pub mod scoring;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::models::{
    RankedNewsItem, RawNewsItem, RawTrendItem, Sentiment, VerificationStatus,
};
pub use crate::view::{
    rank_news, rank_trends, CategoryFilter, NewsQuery, NewsSort, SentimentFilter, TrendSort,
};
