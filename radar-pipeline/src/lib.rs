//! Dedup, aggregation and merge logic for the AgentRadar pipeline
//!
//! Everything here is a pure function of its inputs: each run rebuilds the
//! output documents from scratch (no incremental state), and the store
//! replaces the previous document atomically so a crash mid-run never
//! leaves a partial file behind.

pub mod aggregate;
pub mod dedup;
pub mod merge;
pub mod stats;
pub mod store;

pub use aggregate::{build_news_document, player_metrics};
pub use dedup::{parse_feed_date, MAX_MENTIONS_PER_PLAYER};
pub use merge::{default_reach, looks_like_rumor, merge_dossier, merge_items};
pub use stats::compute_stats;
pub use store::{load_dossier, save_dossier, save_news_document, StoreError};
