// src/config.rs
//! Shell configuration: endpoints and cache namespace.
//!
//! Loaded from a JSON file with env-var overrides, so local runs work from
//! `.env` (dotenvy) without a config file present.

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

pub const ENV_NEWS_ENDPOINT: &str = "TRENDPULSE_NEWS_ENDPOINT";
pub const ENV_TRENDS_ENDPOINT: &str = "TRENDPULSE_TRENDS_ENDPOINT";
pub const ENV_CACHE_NAMESPACE: &str = "TRENDPULSE_CACHE_NAMESPACE";

fn default_news_endpoint() -> String {
    "https://api.example.invalid/v1/news".to_string()
}
fn default_trends_endpoint() -> String {
    "https://api.example.invalid/v1/trends".to_string()
}
fn default_cache_namespace() -> String {
    "trendpulse".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_news_endpoint")]
    pub news_endpoint: String,
    #[serde(default = "default_trends_endpoint")]
    pub trends_endpoint: String,
    #[serde(default = "default_cache_namespace")]
    pub cache_namespace: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            news_endpoint: default_news_endpoint(),
            trends_endpoint: default_trends_endpoint(),
            cache_namespace: default_cache_namespace(),
        }
    }
}

impl Settings {
    /// Load from a JSON file, then apply env overrides. A missing file is
    /// not an error; defaults plus env apply.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut cfg = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(_) => Settings::default(),
        };

        if let Ok(v) = env::var(ENV_NEWS_ENDPOINT) {
            cfg.news_endpoint = v;
        }
        if let Ok(v) = env::var(ENV_TRENDS_ENDPOINT) {
            cfg.trends_endpoint = v;
        }
        if let Ok(v) = env::var(ENV_CACHE_NAMESPACE) {
            cfg.cache_namespace = v;
        }

        info!(news = %cfg.news_endpoint, trends = %cfg.trends_endpoint, "settings loaded");
        Ok(cfg)
    }

    /// `.env` + default config path, the demo-bin entrypoint.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load("config/trendpulse.json")
    }
}
