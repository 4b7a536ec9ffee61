//! Press-mention ingestion for the AgentRadar pipeline
//!
//! This crate turns raw RSS/Google News feeds into normalized [`Mention`]
//! records for the tracked roster:
//! - feed registry: curated sports dailies plus per-club and per-player
//!   Google News search feeds
//! - fetcher: one bounded GET per feed, failures swallowed at the boundary
//! - extractor: tolerant field scanning over the raw XML
//! - matcher + sentiment: diacritic-insensitive alias matching and
//!   keyword-based scoring
//! - assembler: cleaning, outlet splitting and truncation
//!
//! [`Mention`]: radar_core::Mention

pub mod assembler;
pub mod error;
pub mod extractor;
pub mod feeds;
pub mod fetcher;
pub mod matcher;
pub mod sentiment;

pub use assembler::{assemble, clean_text};
pub use error::NewsError;
pub use extractor::RawItem;
pub use feeds::{curated_feeds, player_search_feeds, tracked_roster, FeedSource, Player};
pub use fetcher::FeedFetcher;
pub use sentiment::SentimentLexicon;
