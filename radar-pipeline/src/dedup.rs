//! Deduplication and lenient date handling
//!
//! The two pipelines key duplicates differently: the news pipeline uses the
//! full normalized title, the merge pipeline a 50-char prefix. Both keep the
//! first occurrence; the news pipeline sorts newest-first beforehand so
//! "first" means "most recent".

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use radar_core::Mention;

/// Storage cap per player after dedup; display truncation, not correctness
pub const MAX_MENTIONS_PER_PLAYER: usize = 30;

/// Length of the merge pipeline's dedup key prefix, in chars
pub const PREFIX_KEY_LEN: usize = 50;

/// Parse a feed date string leniently
///
/// RSS feeds use RFC 2822; aggregator feeds occasionally RFC 3339. Anything
/// else is `None`, which callers treat as fail-open (see [`is_recent`]).
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|d| d.with_timezone(&Utc))
        })
}

/// Whether a date string falls inside the window ending at `now`
///
/// Unparseable dates count as recent: a bad `pubDate` must not drop an
/// article from the recent set.
pub fn is_recent(raw: &str, now: DateTime<Utc>, days: i64) -> bool {
    match parse_feed_date(raw) {
        Some(date) => now.signed_duration_since(date) <= Duration::days(days),
        None => true,
    }
}

/// Full-title dedup key for the news pipeline
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// 50-char-prefix dedup key for the merge pipeline
pub fn prefix_key(title: &str) -> String {
    title.trim().to_lowercase().chars().take(PREFIX_KEY_LEN).collect()
}

/// Sort mentions by publish date, newest first
///
/// Unparseable dates compare as `None` and sort last; the comparison is
/// total, so bad dates can never poison the sort.
pub fn sort_newest_first(mentions: &mut [Mention]) {
    mentions.sort_by(|a, b| {
        let da = parse_feed_date(&a.published_at);
        let db = parse_feed_date(&b.published_at);
        db.cmp(&da)
    });
}

/// Drop duplicate mentions by full-title key, keeping the first occurrence
pub fn dedup_by_title(mentions: &mut Vec<Mention>) {
    let mut seen = HashSet::new();
    mentions.retain(|mention| {
        let key = title_key(&mention.title);
        if seen.contains(&key) {
            false
        } else {
            seen.insert(key);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core::Sentiment;

    fn mention(title: &str, published_at: &str) -> Mention {
        Mention {
            player: "Abde Ezzalzouli".to_string(),
            title: title.to_string(),
            description: String::new(),
            source: "Marca".to_string(),
            url: "https://example.com/a".to_string(),
            published_at: published_at.to_string(),
            sentiment: Sentiment::from_score(0),
        }
    }

    #[test]
    fn test_parse_rfc2822_and_rfc3339() {
        assert!(parse_feed_date("Mon, 06 Jan 2025 10:00:00 GMT").is_some());
        assert!(parse_feed_date("2025-01-06T10:00:00Z").is_some());
        assert!(parse_feed_date("not-a-date").is_none());
    }

    #[test]
    fn test_unparseable_date_is_recent() {
        let now = Utc::now();
        assert!(is_recent("not-a-date", now, 7));
        assert!(is_recent("", now, 7));
    }

    #[test]
    fn test_most_recent_duplicate_wins() {
        let mut mentions = vec![
            mention("Abde titular", "Mon, 06 Jan 2025 10:00:00 GMT"),
            mention("abde titular ", "Wed, 08 Jan 2025 10:00:00 GMT"),
            mention("Otro asunto", "Tue, 07 Jan 2025 10:00:00 GMT"),
        ];
        sort_newest_first(&mut mentions);
        dedup_by_title(&mut mentions);
        assert_eq!(mentions.len(), 2);
        // The Wednesday copy survives, not the Monday one.
        assert_eq!(
            mentions[0].published_at,
            "Wed, 08 Jan 2025 10:00:00 GMT"
        );
    }

    #[test]
    fn test_sort_puts_unparseable_dates_last() {
        let mut mentions = vec![
            mention("a", "not-a-date"),
            mention("b", "Mon, 06 Jan 2025 10:00:00 GMT"),
        ];
        sort_newest_first(&mut mentions);
        assert_eq!(mentions[0].title, "b");
        assert_eq!(mentions[1].title, "a");
    }

    #[test]
    fn test_prefix_key_truncates() {
        let long = "A".repeat(80);
        assert_eq!(prefix_key(&long).chars().count(), PREFIX_KEY_LEN);
        assert_eq!(prefix_key("  Corto  "), "corto");
    }
}
