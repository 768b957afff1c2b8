// src/provider.rs
//! Fetch contracts for the generative-AI backend.
//!
//! Providers are the only asynchronous, fallible layer; everything behind
//! them is pure. The `*_or_empty` wrappers enforce the boundary contract:
//! the UI shell sees a collection or an empty collection, never an error.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{RawNewsItem, RawTrendItem};

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<RawNewsItem>>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait TrendProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<RawTrendItem>>;
    fn name(&self) -> &'static str;
}

/// Fetch news, degrading any failure to an empty batch. Callers treat an
/// empty batch as "no new data" and keep rendering the previous snapshot.
pub async fn fetch_news_or_empty(provider: &dyn NewsProvider) -> Vec<RawNewsItem> {
    match provider.fetch_latest().await {
        Ok(items) => {
            info!(provider = provider.name(), count = items.len(), "news batch fetched");
            items
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "news fetch failed, using empty batch");
            Vec::new()
        }
    }
}

/// Trend twin of [`fetch_news_or_empty`].
pub async fn fetch_trends_or_empty(provider: &dyn TrendProvider) -> Vec<RawTrendItem> {
    match provider.fetch_latest().await {
        Ok(items) => {
            info!(provider = provider.name(), count = items.len(), "trend batch fetched");
            items
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "trend fetch failed, using empty batch");
            Vec::new()
        }
    }
}

/// JSON-over-HTTP provider against the AI backend. The endpoint returns a
/// bare array of raw items; field-level leniency lives in the models, so a
/// sloppy batch still decodes item by item.
pub struct HttpProvider {
    http: reqwest::Client,
    news_endpoint: String,
    trends_endpoint: String,
}

impl HttpProvider {
    pub fn new(news_endpoint: impl Into<String>, trends_endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client");
        Self {
            http,
            news_endpoint: news_endpoint.into(),
            trends_endpoint: trends_endpoint.into(),
        }
    }
}

#[async_trait]
impl NewsProvider for HttpProvider {
    async fn fetch_latest(&self) -> Result<Vec<RawNewsItem>> {
        let resp = self
            .http
            .get(&self.news_endpoint)
            .send()
            .await
            .context("requesting news endpoint")?
            .error_for_status()
            .context("news endpoint status")?;
        resp.json().await.context("decoding news batch")
    }

    fn name(&self) -> &'static str {
        "http-news"
    }
}

#[async_trait]
impl TrendProvider for HttpProvider {
    async fn fetch_latest(&self) -> Result<Vec<RawTrendItem>> {
        let resp = self
            .http
            .get(&self.trends_endpoint)
            .send()
            .await
            .context("requesting trends endpoint")?
            .error_for_status()
            .context("trends endpoint status")?;
        resp.json().await.context("decoding trend batch")
    }

    fn name(&self) -> &'static str {
        "http-trends"
    }
}
