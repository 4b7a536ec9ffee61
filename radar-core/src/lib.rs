//! Core types for the AgentRadar pipeline
//!
//! This crate defines the shared data structures exchanged between the
//! ingestion crates and the JSON documents consumed by the dashboards:
//! press mentions, per-player metrics, and the merged player dossier.

pub mod dossier;
pub mod mention;

pub use dossier::{
    AggregateStats, DailyCount, MergedNewsItem, NewsSection, PlayerDossier, RegionStats,
    TodayAlerts,
};
pub use mention::{
    KeywordCount, Mention, NewsDocument, PlayerMetrics, Sentiment, SentimentLabel, SourceCount,
};
