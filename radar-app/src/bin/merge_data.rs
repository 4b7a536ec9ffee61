//! One-shot dossier merge run
//!
//! Loads the stored dossier for one tracked player (first CLI argument,
//! defaulting to the first roster entry), fetches that player's search
//! feeds, and merges the fresh mentions into the dossier: dedup by title
//! prefix, tag backfill, full stats recompute. The dossier file is replaced
//! atomically.

use anyhow::{Context, Result};
use chrono::Utc;
use radar_core::MergedNewsItem;
use radar_news::{
    assemble, matcher, player_search_feeds, tracked_roster, FeedFetcher, Player, SentimentLexicon,
};
use radar_pipeline::{
    default_reach, load_dossier, looks_like_rumor, merge_dossier, save_dossier,
};
use tracing::info;

/// All configured feeds are Spanish-language editions.
const FEED_LANGUAGE: &str = "es";

fn select_player(roster: Vec<Player>) -> Result<Player> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let wanted = matcher::normalize(&arg);
            roster
                .into_iter()
                .find(|p| {
                    matcher::normalize(&p.name) == wanted
                        || radar_app::player_slug(&p.name) == wanted
                })
                .with_context(|| format!("unknown player: {arg}"))
        }
        None => roster
            .into_iter()
            .next()
            .context("tracked roster is empty"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    radar_app::init_tracing();

    let player = select_player(tracked_roster())?;
    info!("Merging dossier for {}", player.name);

    let path = radar_app::data_dir().join(format!(
        "player-{}.json",
        radar_app::player_slug(&player.name)
    ));
    let previous = load_dossier(&path)?;
    if previous.is_none() {
        info!("No stored dossier at {}, starting fresh", path.display());
    }

    let fetcher = FeedFetcher::new();
    let lexicon = SentimentLexicon::default();
    let roster = std::slice::from_ref(&player);
    let mut fresh: Vec<MergedNewsItem> = Vec::new();

    for feed in &player_search_feeds(&player) {
        for item in fetcher.fetch_items(feed).await {
            for mention in assemble(&item, roster, &lexicon) {
                let text = format!("{} {}", mention.title, mention.description);
                let mut merged = MergedNewsItem::from(mention);
                merged.language = Some(FEED_LANGUAGE.to_string());
                merged.is_rumor = looks_like_rumor(&text);
                merged.reach = default_reach(&merged.source);
                fresh.push(merged);
            }
        }
    }

    info!("Fetched {} fresh mentions for {}", fresh.len(), player.name);

    let dossier = merge_dossier(previous, fresh, &player.name, Utc::now());
    save_dossier(&path, &dossier)?;

    info!(
        "Dossier now holds {} items ({} recent, {} today)",
        dossier.news.all.len(),
        dossier.news.recent.len(),
        dossier.alerts.new_count
    );

    Ok(())
}
