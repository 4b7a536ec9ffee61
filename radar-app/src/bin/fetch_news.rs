//! One-shot news ingestion run
//!
//! Polls every configured feed once, assembles mentions for the tracked
//! roster, and replaces `<data>/news-data.json` with the freshly computed
//! document. Per-feed failures are logged and absorbed; only a failed
//! write aborts the run.

use anyhow::Result;
use chrono::Utc;
use radar_news::{assemble, curated_feeds, tracked_roster, FeedFetcher, SentimentLexicon};
use radar_pipeline::{build_news_document, save_news_document};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    radar_app::init_tracing();
    info!("Starting AgentRadar news ingestion");

    let roster = tracked_roster();
    let feeds = curated_feeds(&roster);
    let lexicon = SentimentLexicon::default();
    info!(
        "Tracking {} players across {} feeds",
        roster.len(),
        feeds.len()
    );

    let fetcher = FeedFetcher::new();
    let mut mentions = Vec::new();
    let mut item_count = 0usize;

    // Feeds are fetched one at a time; the mention list is the only state
    // carried across the awaits.
    for feed in &feeds {
        let items = fetcher.fetch_items(feed).await;
        info!("{}: {} items", feed.name, items.len());
        item_count += items.len();
        for item in &items {
            mentions.extend(assemble(item, &roster, &lexicon));
        }
    }

    info!(
        "Assembled {} mentions from {} feed items",
        mentions.len(),
        item_count
    );

    let document = build_news_document(mentions, &lexicon, Utc::now());
    let path = radar_app::data_dir().join("news-data.json");
    save_news_document(&path, &document)?;

    for (player, metrics) in &document.metrics {
        info!(
            "{}: {} mentions ({} positive / {} negative / {} neutral)",
            player, metrics.total_mentions, metrics.positive, metrics.negative, metrics.neutral
        );
    }

    Ok(())
}
