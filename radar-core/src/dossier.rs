//! Player dossier structures for the cross-source merge pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mention::{Mention, Sentiment, SourceCount};

/// A mention enriched with classification tags for the merged dossier
///
/// `region`, `country` and `topics` may be absent on items coming from older
/// documents; the merger back-fills them by fixed keyword rules and never
/// overwrites a value that is already present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedNewsItem {
    pub player: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    /// Original feed date string
    pub published_at: String,
    pub sentiment: Sentiment,
    /// Explicit classification from the source collection, when it had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 639-1 language code of the article, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub is_rumor: bool,
    /// Estimated audience size, summed into the aggregate statistics
    #[serde(default)]
    pub reach: u64,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl From<Mention> for MergedNewsItem {
    fn from(m: Mention) -> Self {
        Self {
            player: m.player,
            title: m.title,
            description: m.description,
            source: m.source,
            url: m.url,
            published_at: m.published_at,
            sentiment: m.sentiment,
            category: None,
            region: None,
            country: None,
            language: None,
            is_rumor: false,
            reach: 0,
            topics: Vec::new(),
        }
    }
}

/// Per-region slice of the aggregate statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    pub total: u64,
    /// Items in the last 7 days
    pub recent: u64,
}

/// One calendar day of the last-30-days series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Day in YYYY-MM-DD form
    pub date: String,
    pub count: u64,
    pub positive: u64,
    pub negative: u64,
}

/// Consolidated statistics over the full merged mention set
///
/// Recomputed from scratch on every merge run; never incrementally updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total: u64,
    pub last7_days: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub by_region: BTreeMap<String, RegionStats>,
    pub by_country: BTreeMap<String, u64>,
    pub by_language: BTreeMap<String, u64>,
    pub rumor_count: u64,
    pub total_reach: u64,
    /// Top 15 outlets by mention count
    pub top_sources: Vec<SourceCount>,
    /// One entry per calendar day, oldest first
    pub last30_days: Vec<DailyCount>,
}

/// Same-day alert summary for the dashboard's notification strip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayAlerts {
    pub new_count: u64,
    pub new_rumors: u64,
    /// Distinct countries among today's items
    pub new_countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_headline: Option<String>,
}

/// News views of the dossier: the full set plus the derived slices
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSection {
    pub all: Vec<MergedNewsItem>,
    pub by_region: BTreeMap<String, Vec<MergedNewsItem>>,
    /// Items from the last 7 days
    pub recent: Vec<MergedNewsItem>,
}

/// Output document of the merge pipeline, one per tracked player
///
/// `social` through `upcoming_matches` are produced by external collaborators
/// and carried through the merge untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDossier {
    pub player: String,
    pub news: NewsSection,
    pub stats: AggregateStats,
    pub alerts: TodayAlerts,
    #[serde(default)]
    pub social: Value,
    #[serde(default)]
    pub market_value: Value,
    #[serde(default)]
    pub injuries: Value,
    #[serde(default)]
    pub contract: Value,
    #[serde(default)]
    pub performance: Value,
    #[serde(default)]
    pub upcoming_matches: Value,
    /// ISO-8601 timestamp of the run that produced this document
    pub timestamp: String,
    #[serde(default = "default_version")]
    pub version: u32,
}

pub(crate) fn default_version() -> u32 {
    2
}

/// Current dossier document version
pub const DOSSIER_VERSION: u32 = 2;
