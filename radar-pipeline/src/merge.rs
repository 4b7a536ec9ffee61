//! Cross-source merger for the player dossier
//!
//! Combines the previously stored mention collection with a freshly fetched
//! one, back-fills missing classification tags by fixed keyword rules, and
//! rebuilds every derived view and statistic from scratch. Back-fill never
//! overwrites a tag that is already present.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use radar_core::dossier::DOSSIER_VERSION;
use radar_core::{MergedNewsItem, NewsSection, PlayerDossier, TodayAlerts};
use tracing::info;

use crate::dedup::{is_recent, parse_feed_date, prefix_key};
use crate::stats::compute_stats;

/// Days covered by the "recent" view
const RECENT_WINDOW_DAYS: i64 = 7;

/// Language-code to region mapping used when no explicit category is present
fn region_for_language(language: Option<&str>) -> &'static str {
    match language {
        Some("es") => "spain_national",
        Some("fr") => "france",
        Some("en") => "uk",
        Some("nl") => "belgium",
        _ => "other",
    }
}

/// Region to country display-name table
fn country_for_region(region: &str) -> &'static str {
    match region {
        "spain_national" => "España",
        "france" => "Francia",
        "uk" => "Reino Unido",
        "belgium" => "Bélgica",
        _ => "Otro",
    }
}

/// Multilingual keyword rules for the four topic tags
const TOPIC_RULES: &[(&str, &[&str])] = &[
    ("injury", &["lesión", "lesion", "lesionado", "injury", "blessure", "blessé"]),
    ("transfer", &["fichaje", "traspaso", "cesión", "cesion", "transfer", "mercato"]),
    ("goal", &["gol", "golazo", "doblete", "goal", "but "]),
    ("national_team", &["selección", "seleccion", "convocatoria", "convocado", "national team"]),
];

/// Default audience estimate for an outlet, used when the source collection
/// supplied none
pub fn default_reach(source: &str) -> u64 {
    match source {
        "Marca" => 50_000,
        "AS" => 40_000,
        "Mundo Deportivo" => 30_000,
        "Sport" => 25_000,
        _ => 5_000,
    }
}

/// Whether the text reads like transfer-rumor coverage
pub fn looks_like_rumor(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["rumor", "rumour", "rumores", "interesa", "podría fichar"]
        .iter()
        .any(|term| lower.contains(term))
}

/// Infer topic tags from title + description
fn infer_topics(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOPIC_RULES
        .iter()
        .filter(|(_, terms)| terms.iter().any(|term| lower.contains(term)))
        .map(|(topic, _)| topic.to_string())
        .collect()
}

/// Back-fill missing classification tags; present values are never touched
pub fn backfill_tags(item: &mut MergedNewsItem) {
    if item.region.is_none() {
        let region = match &item.category {
            Some(category) => category.clone(),
            None => region_for_language(item.language.as_deref()).to_string(),
        };
        item.region = Some(region);
    }
    if item.country.is_none() {
        let region = item.region.as_deref().unwrap_or("other");
        item.country = Some(country_for_region(region).to_string());
    }
    if item.topics.is_empty() {
        item.topics = infer_topics(&format!("{} {}", item.title, item.description));
    }
}

/// Merge the stored collection with a freshly fetched one
///
/// Concatenates (existing first), dedups by 50-char title prefix keeping the
/// first occurrence in list order, then back-fills tags on every surviving
/// item. There is deliberately no date re-sort before dedup: items already
/// stored win over fresh copies of the same article.
pub fn merge_items(
    existing: Vec<MergedNewsItem>,
    fresh: Vec<MergedNewsItem>,
) -> Vec<MergedNewsItem> {
    let mut all = existing;
    all.extend(fresh);

    let mut seen = HashSet::new();
    all.retain(|item| {
        let key = prefix_key(&item.title);
        if seen.contains(&key) {
            false
        } else {
            seen.insert(key);
            true
        }
    });

    for item in all.iter_mut() {
        backfill_tags(item);
    }
    all
}

/// Summarize the items whose date falls on the current calendar day
///
/// Day equality needs a parseable date; items with bad dates stay out of the
/// alert strip (the fail-open rule covers recency windows, not same-day
/// matching).
fn today_alerts(items: &[MergedNewsItem], now: DateTime<Utc>) -> TodayAlerts {
    let today = now.date_naive();
    let mut todays: Vec<&MergedNewsItem> = items
        .iter()
        .filter(|item| {
            parse_feed_date(&item.published_at)
                .map(|d| d.date_naive() == today)
                .unwrap_or(false)
        })
        .collect();
    todays.sort_by(|a, b| {
        parse_feed_date(&b.published_at).cmp(&parse_feed_date(&a.published_at))
    });

    let mut countries: Vec<String> = todays
        .iter()
        .filter_map(|item| item.country.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    countries.sort();

    TodayAlerts {
        new_count: todays.len() as u64,
        new_rumors: todays.iter().filter(|item| item.is_rumor).count() as u64,
        new_countries: countries,
        latest_headline: todays.first().map(|item| item.title.clone()),
    }
}

/// Merge a freshly fetched collection into the player's dossier
///
/// A pure function of (previous document, fresh items): every view and
/// statistic is rebuilt; the externally produced sections are carried
/// through untouched.
pub fn merge_dossier(
    previous: Option<PlayerDossier>,
    fresh: Vec<MergedNewsItem>,
    player: &str,
    now: DateTime<Utc>,
) -> PlayerDossier {
    let existing = previous
        .as_ref()
        .map(|d| d.news.all.clone())
        .unwrap_or_default();
    let fresh_count = fresh.len();

    let all = merge_items(existing, fresh);

    let recent: Vec<MergedNewsItem> = all
        .iter()
        .filter(|item| is_recent(&item.published_at, now, RECENT_WINDOW_DAYS))
        .cloned()
        .collect();

    let mut by_region: BTreeMap<String, Vec<MergedNewsItem>> = BTreeMap::new();
    for item in &all {
        let region = item.region.clone().unwrap_or_else(|| "other".to_string());
        by_region.entry(region).or_default().push(item.clone());
    }

    let stats = compute_stats(&all, now);
    let alerts = today_alerts(&all, now);

    info!(
        "Merged dossier for {}: {} stored + {} fresh -> {} items",
        player,
        previous.as_ref().map(|d| d.news.all.len()).unwrap_or(0),
        fresh_count,
        all.len()
    );

    // Sections produced by external collaborators ride along unchanged;
    // a first run starts them all at null.
    let (social, market_value, injuries, contract, performance, upcoming_matches) = match previous
    {
        Some(d) => (
            d.social,
            d.market_value,
            d.injuries,
            d.contract,
            d.performance,
            d.upcoming_matches,
        ),
        None => Default::default(),
    };

    PlayerDossier {
        player: player.to_string(),
        news: NewsSection {
            all,
            by_region,
            recent,
        },
        stats,
        alerts,
        social,
        market_value,
        injuries,
        contract,
        performance,
        upcoming_matches,
        timestamp: now.to_rfc3339(),
        version: DOSSIER_VERSION,
    }
}
