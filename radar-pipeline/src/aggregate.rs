//! Per-player aggregation for the news pipeline
//!
//! Metrics are recomputed wholesale on every run from the deduplicated
//! mention set; nothing is incrementally updated.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use radar_core::{KeywordCount, Mention, NewsDocument, PlayerMetrics, SentimentLabel, SourceCount};
use radar_news::SentimentLexicon;
use tracing::info;

use crate::dedup::{dedup_by_title, sort_newest_first, MAX_MENTIONS_PER_PLAYER};

/// Number of outlets reported per player
const TOP_SOURCES: usize = 5;
/// Number of keywords reported per player
const TOP_KEYWORDS: usize = 8;

/// Compute the derived metrics for one player's deduplicated mentions
pub fn player_metrics(mentions: &[Mention], lexicon: &SentimentLexicon) -> PlayerMetrics {
    let total = mentions.len() as u64;
    let positive = count_kind(mentions, SentimentLabel::Positive);
    let negative = count_kind(mentions, SentimentLabel::Negative);
    let neutral = count_kind(mentions, SentimentLabel::Neutral);

    let ratio = if total == 0 {
        0
    } else {
        (positive as f64 / total as f64 * 100.0).round() as u64
    };

    let mut source_counts: HashMap<&str, u64> = HashMap::new();
    for mention in mentions {
        *source_counts.entry(mention.source.as_str()).or_default() += 1;
    }
    let top_sources = top_n(source_counts, TOP_SOURCES)
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();

    let mut keyword_counts: HashMap<String, u64> = HashMap::new();
    for mention in mentions {
        let text = format!("{} {}", mention.title, mention.description);
        for word in lexicon.keyword_hits(&text) {
            *keyword_counts.entry(word.to_string()).or_default() += 1;
        }
    }
    let top_keywords = top_n(keyword_counts, TOP_KEYWORDS)
        .into_iter()
        .map(|(word, count)| KeywordCount { word, count })
        .collect();

    PlayerMetrics {
        total_mentions: total,
        positive,
        negative,
        neutral,
        ratio,
        top_sources,
        top_keywords,
    }
}

fn count_kind(mentions: &[Mention], kind: SentimentLabel) -> u64 {
    mentions.iter().filter(|m| m.sentiment.kind == kind).count() as u64
}

/// Top `n` entries by count descending, name ascending on ties
fn top_n<K: Ord>(counts: HashMap<K, u64>, n: usize) -> Vec<(K, u64)> {
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(n)
        .collect()
}

/// Build the news pipeline's output document
///
/// Groups assembled mentions by player, then per player: sort newest first,
/// dedup by full title (most recent copy wins), cap storage at
/// [`MAX_MENTIONS_PER_PLAYER`], and recompute metrics.
pub fn build_news_document(
    mentions: Vec<Mention>,
    lexicon: &SentimentLexicon,
    now: DateTime<Utc>,
) -> NewsDocument {
    let mut by_player: BTreeMap<String, Vec<Mention>> = BTreeMap::new();
    for mention in mentions {
        by_player
            .entry(mention.player.clone())
            .or_default()
            .push(mention);
    }

    let mut metrics = BTreeMap::new();
    for (player, mentions) in by_player.iter_mut() {
        sort_newest_first(mentions);
        dedup_by_title(mentions);
        mentions.truncate(MAX_MENTIONS_PER_PLAYER);
        metrics.insert(player.clone(), player_metrics(mentions, lexicon));
    }

    info!(
        "Aggregated {} mentions across {} players",
        by_player.values().map(Vec::len).sum::<usize>(),
        by_player.len()
    );

    NewsDocument {
        by_player,
        metrics,
        timestamp: now.to_rfc3339(),
    }
}
