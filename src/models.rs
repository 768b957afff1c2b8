// src/models.rs
//! Boundary data types for the ranking engine.
//!
//! Raw items arrive from the generative-AI backend with loosely-typed fields:
//! free-text timestamps, magnitude strings like "45.2K", scores that may be a
//! number, a numeric string, null, or garbage. The deserializers here pin the
//! defaulting rules so that a raw batch never fails to decode field-by-field.

use serde::{Deserialize, Deserializer, Serialize};

/// Editorial verification status assigned upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStatus {
    Verified,
    NeedsReview,
    Risky,
}

impl Default for VerificationStatus {
    /// Unknown or absent status is treated as not-yet-reviewed.
    fn default() -> Self {
        VerificationStatus::NeedsReview
    }
}

/// Market sentiment attached to a trend keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

fn default_category() -> String {
    "General".to_string()
}

/// One news item as received from the AI collaborator. Immutable once built;
/// lives for a single fetch cycle (then superseded or cached).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub source: String,
    /// Free-text relative time, e.g. "5 min ago", "yesterday".
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub summary: String,
    /// AI-assigned heat in [0,10]; anything non-numeric decodes to `None`.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub trending_score: Option<f64>,
    /// Free-text engagement magnitude, e.g. "45.2K".
    #[serde(default)]
    pub engagement: String,
    #[serde(default)]
    pub verification: VerificationStatus,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A news item plus the derived view fields. Derived fields are a pure
/// function of the raw fields and the item's arrival index within its batch;
/// they are recomputed on every pipeline run and never persisted on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedNewsItem {
    #[serde(flatten)]
    pub raw: RawNewsItem,
    /// Canonical age in minutes.
    pub freshness_minutes: u32,
    /// Display label for the age, e.g. "3h ago".
    pub age_label: String,
    pub hot_score: f64,
    /// Content-readiness heuristic in [30,100].
    pub seo_score: u8,
}

/// One trend keyword as received from the AI collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrendItem {
    /// Batch-local position; not guaranteed unique, used as a tie-break key.
    pub rank: u32,
    pub keyword: String,
    /// Free-text mentions magnitude, e.g. "38.9K".
    #[serde(default)]
    pub mentions: String,
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Signed 24h percentage change.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub change_24h: f64,
}

/// Accepts a number, a numeric string, null, or anything else; non-numeric
/// input decodes to `None` instead of failing the whole batch.
fn lenient_opt_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Loose>::deserialize(de)? {
        Some(Loose::Num(n)) if n.is_finite() => Some(n),
        Some(Loose::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// Like `lenient_opt_f64` but collapses the missing case to 0.0.
fn lenient_f64<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(de)?.unwrap_or(0.0))
}
