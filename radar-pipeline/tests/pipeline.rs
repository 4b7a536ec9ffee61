//! End-to-end checks over the ingestion pipeline: raw feed XML through
//! extraction, assembly, dedup and aggregation.

use chrono::Utc;
use radar_core::SentimentLabel;
use radar_news::{assemble, extractor, Player, SentimentLexicon};
use radar_pipeline::build_news_document;

fn roster() -> Vec<Player> {
    vec![Player::new("Jugador Ejemplo", "Real Betis", &["Jugador"])]
}

#[test]
fn duplicate_headline_across_two_feeds_yields_one_mention() {
    let feed_a = r#"<rss><channel>
        <item>
            <title><![CDATA[Jugador anota gol decisivo - Marca]]></title>
            <description><![CDATA[<p>El extremo firma la victoria</p>]]></description>
            <link>https://example.com/cronica</link>
            <pubDate>Mon, 06 Jan 2025 10:00:00 GMT</pubDate>
        </item>
    </channel></rss>"#;
    let feed_b = r#"<rss><channel>
        <item>
            <title>Jugador anota gol decisivo - Marca</title>
            <link>https://example.net/cronica</link>
            <pubDate>Mon, 06 Jan 2025 09:30:00 GMT</pubDate>
        </item>
    </channel></rss>"#;

    let roster = roster();
    let lexicon = SentimentLexicon::default();

    let mut mentions = Vec::new();
    for (xml, feed_name) in [(feed_a, "Marca"), (feed_b, "Google News")] {
        for item in extractor::extract_items(xml, feed_name) {
            mentions.extend(assemble(&item, &roster, &lexicon));
        }
    }
    assert_eq!(mentions.len(), 2);

    let doc = build_news_document(mentions, &lexicon, Utc::now());
    let stored = &doc.by_player["Jugador Ejemplo"];
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].source, "Marca");
    assert_eq!(stored[0].title, "Jugador anota gol decisivo");
    assert_eq!(stored[0].sentiment.kind, SentimentLabel::Positive);
    assert_eq!(doc.metrics["Jugador Ejemplo"].total_mentions, 1);
}

#[test]
fn bad_dates_survive_the_whole_pipeline() {
    let xml = r#"<rss><channel>
        <item>
            <title>Jugador renueva contrato</title>
            <pubDate>not-a-date</pubDate>
            <link>https://example.com/renueva</link>
        </item>
    </channel></rss>"#;

    let roster = roster();
    let lexicon = SentimentLexicon::default();
    let mut mentions = Vec::new();
    for item in extractor::extract_items(xml, "AS") {
        mentions.extend(assemble(&item, &roster, &lexicon));
    }

    let doc = build_news_document(mentions, &lexicon, Utc::now());
    let stored = &doc.by_player["Jugador Ejemplo"];
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].published_at, "not-a-date");
}
