//! Tolerant RSS/XML item extraction
//!
//! Feeds in the wild are not schema-valid, so this module never parses the
//! document as XML. It scans for `<item>` blocks sequentially and pulls
//! fields out of each block with two patterns tried in order: the
//! CDATA-wrapped form, then the plain-text form. A field that matches
//! neither yields an empty string; malformed markup degrades to partial
//! items instead of failing the document.

use regex::Regex;

/// One extracted feed entry, consumed immediately by the assembler
#[derive(Debug, Clone)]
pub struct RawItem {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Verbatim feed date string, possibly unparseable
    pub pub_date: String,
    /// Name of the feed this item came from
    pub source_feed: String,
}

/// Lazy iterator over `<item>...</item>` blocks
///
/// Non-restartable single pass; an unterminated trailing block is dropped.
pub struct ItemBlocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for ItemBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let start = self.rest.find("<item")?;
            let after_tag = &self.rest[start + 5..];
            // Reject tags that merely start with "item" (e.g. <itemref>).
            match after_tag.chars().next() {
                Some('>') | Some(' ') | Some('\t') | Some('\n') | Some('\r') | Some('/') => {}
                _ => {
                    self.rest = &self.rest[start + 5..];
                    continue;
                }
            }
            let Some(open_end) = after_tag.find('>') else {
                self.rest = "";
                return None;
            };
            let body = &after_tag[open_end + 1..];
            let Some(close) = body.find("</item>") else {
                self.rest = "";
                return None;
            };
            self.rest = &body[close + "</item>".len()..];
            return Some(&body[..close]);
        }
    }
}

/// Scan a raw feed document for item blocks
pub fn item_blocks(xml: &str) -> ItemBlocks<'_> {
    ItemBlocks { rest: xml }
}

/// Extract a named field from an item block
///
/// Tries `<field ...><![CDATA[ ... ]]></field>` first, then
/// `<field ...> ... </field>`; first match wins, no match yields `""`.
/// Attributes inside the opening tag are tolerated.
pub fn extract_field(block: &str, field: &str) -> String {
    let name = regex::escape(field);

    let cdata = Regex::new(&format!(
        r"(?s)<{name}[^>]*><!\[CDATA\[(.*?)\]\]></{name}>"
    ))
    .ok();
    if let Some(re) = cdata {
        if let Some(caps) = re.captures(block) {
            return caps[1].trim().to_string();
        }
    }

    let plain = Regex::new(&format!(r"(?s)<{name}[^>]*>(.*?)</{name}>")).ok();
    if let Some(re) = plain {
        if let Some(caps) = re.captures(block) {
            return caps[1].trim().to_string();
        }
    }

    String::new()
}

/// Extract all items from a raw feed document
pub fn extract_items(xml: &str, feed_name: &str) -> Vec<RawItem> {
    item_blocks(xml)
        .map(|block| RawItem {
            title: extract_field(block, "title"),
            description: extract_field(block, "description"),
            link: extract_field(block, "link"),
            pub_date: extract_field(block, "pubDate"),
            source_feed: feed_name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_cdata_fields() {
        let block = r#"
            <title type="text"><![CDATA[Abde brilla]]></title>
            <link>https://example.com/a</link>
            <pubDate>Mon, 06 Jan 2025 10:00:00 GMT</pubDate>
        "#;
        assert_eq!(extract_field(block, "title"), "Abde brilla");
        assert_eq!(extract_field(block, "link"), "https://example.com/a");
        assert_eq!(extract_field(block, "description"), "");
    }

    #[test]
    fn test_cdata_wins_over_plain() {
        // Both forms present for the same field name; the CDATA form is
        // tried first regardless of position.
        let block = "<title>plain</title><title><![CDATA[wrapped]]></title>";
        assert_eq!(extract_field(block, "title"), "wrapped");
    }

    #[test]
    fn test_item_blocks_tolerate_attributes() {
        let xml = r#"<rss><channel>
            <item rdf:about="x"><title>uno</title></item>
            <item><title>dos</title></item>
        </channel></rss>"#;
        let titles: Vec<String> = item_blocks(xml)
            .map(|b| extract_field(b, "title"))
            .collect();
        assert_eq!(titles, vec!["uno", "dos"]);
    }

    #[test]
    fn test_unterminated_trailing_item_is_dropped() {
        let xml = "<item><title>uno</title></item><item><title>dos";
        let blocks: Vec<&str> = item_blocks(xml).collect();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_itemref_like_tags_are_skipped() {
        let xml = "<itemref idref=\"x\"/><item><title>uno</title></item>";
        let blocks: Vec<&str> = item_blocks(xml).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(extract_field(blocks[0], "title"), "uno");
    }

    #[test]
    fn test_malformed_document_yields_partial_items() {
        let xml = "<item><title>solo titulo</item>";
        let items = extract_items(xml, "Marca");
        assert_eq!(items.len(), 1);
        // The unterminated <title> never matches, so the field is empty
        // rather than the whole document failing.
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].source_feed, "Marca");
    }
}
