//! Press-mention data structures for the news ingestion pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Three-way sentiment classification of a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Keyword-based sentiment of an article
///
/// `score` is the signed sum of distinct keyword hits; `kind` is purely the
/// sign of `score` (strictly positive, strictly negative, or zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub kind: SentimentLabel,
    pub score: i32,
}

impl Sentiment {
    /// Build a sentiment whose label is derived from the sign of `score`.
    pub fn from_score(score: i32) -> Self {
        let kind = match score {
            s if s > 0 => SentimentLabel::Positive,
            s if s < 0 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        };
        Self { kind, score }
    }
}

/// A single news article judged to reference a tracked player
///
/// `title` and `description` are cleaned (no HTML tags or encoded entities)
/// and length-capped. `published_at` keeps the original feed date string
/// verbatim; it is never reparsed into a canonical zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    /// Canonical player name from the tracked roster
    pub player: String,
    /// Cleaned headline, at most 200 chars
    pub title: String,
    /// Cleaned excerpt, at most 150 chars
    pub description: String,
    /// Outlet name, at most 30 chars
    pub source: String,
    /// Article URL
    pub url: String,
    /// Original feed date string
    pub published_at: String,
    pub sentiment: Sentiment,
}

/// Mention count for a single outlet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

/// Hit count for a single sentiment keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Derived per-player metrics, recomputed wholesale on every run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetrics {
    pub total_mentions: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    /// positive/total * 100, rounded; 0 when there are no mentions
    pub ratio: u64,
    /// Top 5 outlets by mention count
    pub top_sources: Vec<SourceCount>,
    /// Top 8 sentiment keywords by hit count
    pub top_keywords: Vec<KeywordCount>,
}

/// Output document of the news pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDocument {
    pub by_player: BTreeMap<String, Vec<Mention>>,
    pub metrics: BTreeMap<String, PlayerMetrics>,
    /// ISO-8601 timestamp of the run that produced this document
    pub timestamp: String,
}
