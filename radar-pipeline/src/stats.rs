//! Aggregate statistics over the merged mention set
//!
//! Full recompute on every run. Data volumes are tens of items, so there is
//! no incremental maintenance; the recompute is the reference semantics.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;
use radar_core::{AggregateStats, DailyCount, MergedNewsItem, RegionStats, SentimentLabel, SourceCount};

use crate::dedup::{is_recent, parse_feed_date};

/// Number of outlets reported in the aggregate
const TOP_SOURCES: usize = 15;
/// Length of the daily series, in calendar days
const DAILY_SERIES_DAYS: i64 = 30;
/// Days counted as "recent" in region stats and the last-7 total
const RECENT_DAYS: i64 = 7;

/// Recompute every aggregate statistic from scratch
///
/// Items with unparseable dates count toward the recency windows (fail-open)
/// but cannot be placed on the daily series.
pub fn compute_stats(items: &[MergedNewsItem], now: DateTime<Utc>) -> AggregateStats {
    let total = items.len() as u64;
    let last7_days = items
        .iter()
        .filter(|item| is_recent(&item.published_at, now, RECENT_DAYS))
        .count() as u64;

    let positive = count_kind(items, SentimentLabel::Positive);
    let negative = count_kind(items, SentimentLabel::Negative);
    let neutral = count_kind(items, SentimentLabel::Neutral);

    let mut by_region: BTreeMap<String, RegionStats> = BTreeMap::new();
    let mut by_country: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_language: BTreeMap<String, u64> = BTreeMap::new();
    for item in items {
        let region = item.region.clone().unwrap_or_else(|| "other".to_string());
        let entry = by_region.entry(region).or_default();
        entry.total += 1;
        if is_recent(&item.published_at, now, RECENT_DAYS) {
            entry.recent += 1;
        }

        let country = item.country.clone().unwrap_or_else(|| "Otro".to_string());
        *by_country.entry(country).or_default() += 1;

        if let Some(language) = &item.language {
            *by_language.entry(language.clone()).or_default() += 1;
        }
    }

    let rumor_count = items.iter().filter(|item| item.is_rumor).count() as u64;
    let total_reach = items.iter().map(|item| item.reach).sum();

    let mut source_counts: HashMap<&str, u64> = HashMap::new();
    for item in items {
        *source_counts.entry(item.source.as_str()).or_default() += 1;
    }
    let top_sources = source_counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .take(TOP_SOURCES)
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();

    AggregateStats {
        total,
        last7_days,
        positive,
        negative,
        neutral,
        by_region,
        by_country,
        by_language,
        rumor_count,
        total_reach,
        top_sources,
        last30_days: daily_series(items, now),
    }
}

fn count_kind(items: &[MergedNewsItem], kind: SentimentLabel) -> u64 {
    items.iter().filter(|item| item.sentiment.kind == kind).count() as u64
}

/// One entry per calendar day for the last 30 days, oldest first
///
/// Days without coverage appear with zero counts so the chart consumer gets
/// a dense series.
fn daily_series(items: &[MergedNewsItem], now: DateTime<Utc>) -> Vec<DailyCount> {
    let mut per_day: HashMap<String, (u64, u64, u64)> = HashMap::new();
    let window_start = (now - Duration::days(DAILY_SERIES_DAYS - 1)).date_naive();

    for item in items {
        let Some(date) = parse_feed_date(&item.published_at) else {
            continue;
        };
        let day = date.date_naive();
        if day < window_start || day > now.date_naive() {
            continue;
        }
        let entry = per_day.entry(day.format("%Y-%m-%d").to_string()).or_default();
        entry.0 += 1;
        match item.sentiment.kind {
            SentimentLabel::Positive => entry.1 += 1,
            SentimentLabel::Negative => entry.2 += 1,
            SentimentLabel::Neutral => {}
        }
    }

    (0..DAILY_SERIES_DAYS)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();
            let key = day.format("%Y-%m-%d").to_string();
            let (count, positive, negative) = per_day.get(&key).copied().unwrap_or_default();
            DailyCount {
                date: key,
                count,
                positive,
                negative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core::Sentiment;

    fn item(title: &str, date: &str, score: i32) -> MergedNewsItem {
        MergedNewsItem {
            player: "Abde Ezzalzouli".to_string(),
            title: title.to_string(),
            description: String::new(),
            source: "Marca".to_string(),
            url: "https://example.com/a".to_string(),
            published_at: date.to_string(),
            sentiment: Sentiment::from_score(score),
            category: None,
            region: Some("spain_national".to_string()),
            country: Some("España".to_string()),
            language: Some("es".to_string()),
            is_rumor: false,
            reach: 1_000,
            topics: Vec::new(),
        }
    }

    #[test]
    fn test_totals_and_breakdowns() {
        let now = Utc::now();
        let today = now.to_rfc3339();
        let items = vec![
            item("uno", &today, 1),
            item("dos", &today, -1),
            item("tres", &today, 0),
        ];
        let stats = compute_stats(&items, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.positive + stats.negative + stats.neutral, stats.total);
        assert_eq!(stats.last7_days, 3);
        assert_eq!(stats.by_region["spain_national"].total, 3);
        assert_eq!(stats.by_region["spain_national"].recent, 3);
        assert_eq!(stats.by_country["España"], 3);
        assert_eq!(stats.by_language["es"], 3);
        assert_eq!(stats.total_reach, 3_000);
        assert_eq!(stats.top_sources[0].source, "Marca");
    }

    #[test]
    fn test_empty_set_is_valid() {
        let stats = compute_stats(&[], Utc::now());
        assert_eq!(stats.total, 0);
        assert!(stats.by_region.is_empty());
        assert_eq!(stats.last30_days.len(), 30);
        assert!(stats.last30_days.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_unparseable_date_counts_as_recent_but_not_daily() {
        let now = Utc::now();
        let items = vec![item("sin fecha", "not-a-date", 1)];
        let stats = compute_stats(&items, now);
        assert_eq!(stats.last7_days, 1);
        assert!(stats.last30_days.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_daily_series_is_dense_and_ordered() {
        let now = Utc::now();
        let yesterday = (now - Duration::days(1)).to_rfc3339();
        let items = vec![item("ayer", &yesterday, 1)];
        let stats = compute_stats(&items, now);

        assert_eq!(stats.last30_days.len(), 30);
        // Oldest first; the populated day sits next to the end.
        let filled: Vec<&DailyCount> =
            stats.last30_days.iter().filter(|d| d.count > 0).collect();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].positive, 1);
        assert_eq!(
            stats.last30_days[28].date,
            (now - Duration::days(1)).date_naive().format("%Y-%m-%d").to_string()
        );
    }
}
