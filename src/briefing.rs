// src/briefing.rs
//! Strategy summarization boundary.
//!
//! Folding a ranked news view into a briefing is delegated wholesale to the
//! AI collaborator; this crate only fixes the contract and the briefing
//! shape. No local computation happens here.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::RankedNewsItem;

/// Compact briefing produced from a news view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBriefing {
    /// One-line focus statement for the period.
    pub headline_focus: String,
    #[serde(default)]
    pub key_themes: Vec<String>,
    #[serde(default)]
    pub content_angles: Vec<String>,
    #[serde(default)]
    pub risk_notes: Vec<String>,
}

#[async_trait]
pub trait StrategySummarizer: Send + Sync {
    /// Fold a ranked collection into a briefing. Implementations call the
    /// AI backend; failure is theirs to report, the caller decides whether
    /// to keep showing a previous briefing.
    async fn summarize(&self, items: &[RankedNewsItem]) -> Result<StrategyBriefing>;
}
