//! Mention assembly: cleaning, outlet splitting and truncation
//!
//! Turns one [`RawItem`] into zero or more [`Mention`]s, one per tracked
//! player whose matcher fires on the combined title + description text.

use radar_core::Mention;
use regex::Regex;

use crate::extractor::RawItem;
use crate::feeds::Player;
use crate::matcher;
use crate::sentiment::SentimentLexicon;

/// Max headline length, in chars
const MAX_TITLE_LEN: usize = 200;
/// Max description length, in chars
const MAX_DESCRIPTION_LEN: usize = 150;
/// Max outlet name length, in chars
const MAX_SOURCE_LEN: usize = 30;

/// Split a feed title into headline and outlet
///
/// Aggregator feeds embed the outlet as `"<headline> - <outlet>"`; the text
/// after the LAST `" - "` is the outlet. Without the separator the outlet is
/// the feed's own name and the headline is the raw title unchanged.
pub fn split_title_source(raw_title: &str, feed_name: &str) -> (String, String) {
    if let Some(pos) = raw_title.rfind(" - ") {
        let headline = raw_title[..pos].trim().to_string();
        let outlet = raw_title[pos + 3..].trim().to_string();
        (headline, outlet)
    } else {
        (raw_title.trim().to_string(), feed_name.to_string())
    }
}

/// Clean display text coming out of a feed
///
/// Applied in a fixed order, where each step assumes the previous ones ran:
/// strip HTML tags (including unterminated fragments at the string
/// boundaries), decode the fixed entity set (numeric entities are dropped),
/// strip bare URLs, collapse whitespace runs, trim.
pub fn clean_text(raw: &str) -> String {
    let stripped = strip_tags(raw);
    let decoded = decode_entities(&stripped);
    let without_urls = strip_urls(&decoded);
    // Collapse whitespace and trim in one pass.
    without_urls.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip HTML tags, tolerating fragments cut off at either boundary
fn strip_tags(input: &str) -> String {
    // A leading close-fragment ("...attr>text") has a '>' before any '<';
    // drop through it.
    let input = match (input.find('>'), input.find('<')) {
        (Some(gt), Some(lt)) if gt < lt => &input[gt + 1..],
        (Some(gt), None) => &input[gt + 1..],
        _ => input,
    };

    let mut result = String::new();
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Decode the fixed entity set; numeric entities are dropped
fn decode_entities(input: &str) -> String {
    let decoded = input
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    match Regex::new(r"&#x?[0-9a-fA-F]+;") {
        Ok(re) => re.replace_all(&decoded, "").into_owned(),
        Err(_) => decoded,
    }
}

/// Remove bare URLs
fn strip_urls(input: &str) -> String {
    match Regex::new(r"https?://\S+") {
        Ok(re) => re.replace_all(input, "").into_owned(),
        Err(_) => input.to_string(),
    }
}

/// Truncate to at most `max` chars, on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Assemble mentions from one raw item
///
/// Matching and scoring run over the raw `title + " " + description` text;
/// cleaning and truncation apply only to the stored display fields.
pub fn assemble(item: &RawItem, roster: &[Player], lexicon: &SentimentLexicon) -> Vec<Mention> {
    let text = format!("{} {}", item.title, item.description);
    let sentiment = lexicon.score(&text);

    let (headline, outlet) = split_title_source(&item.title, &item.source_feed);
    let title = truncate_chars(&clean_text(&headline), MAX_TITLE_LEN);
    let description = truncate_chars(&clean_text(&item.description), MAX_DESCRIPTION_LEN);
    let source = truncate_chars(outlet.trim(), MAX_SOURCE_LEN);

    roster
        .iter()
        .filter(|player| matcher::mentions_player(&text, player))
        .map(|player| Mention {
            player: player.name.clone(),
            title: title.clone(),
            description: description.clone(),
            source: source.clone(),
            url: item.link.clone(),
            published_at: item.pub_date.clone(),
            sentiment,
        })
        .collect()
}
