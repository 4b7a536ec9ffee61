//! Feed registry and tracked roster
//!
//! Static configuration for the ingestion run: the curated list of RSS
//! endpoints and the roster of tracked players with their alias tables.
//! Built once at process start and passed into the pipeline as parameters.

/// A named RSS/Atom endpoint
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Name of the source, used as the fallback outlet name
    pub name: String,
    /// Feed URL
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// A tracked player with the alias table used for entity matching
///
/// Aliases are curated nickname/transliteration variants. Short or generic
/// aliases risk false positives against unrelated articles; that is an
/// accepted precision/recall tradeoff of substring matching.
#[derive(Debug, Clone)]
pub struct Player {
    /// Canonical name, used as the key in output documents
    pub name: String,
    pub aliases: Vec<String>,
    pub club: String,
}

impl Player {
    pub fn new(name: &str, club: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            club: club.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The fixed roster of tracked players
pub fn tracked_roster() -> Vec<Player> {
    vec![
        Player::new(
            "Abde Ezzalzouli",
            "Real Betis",
            &["Abde", "Ezzalzouli", "Abdessamad"],
        ),
        Player::new(
            "Youssef En-Nesyri",
            "Fenerbahçe",
            &["En-Nesyri", "En Nesyri", "Youssef"],
        ),
        Player::new("Ilias Akhomach", "Villarreal", &["Akhomach"]),
        Player::new("Chadi Riad", "Crystal Palace", &["Riad", "Chadi"]),
        Player::new("Adam Aznou", "Bayern Múnich", &["Aznou"]),
    ]
}

/// Google News search feed for an arbitrary query, Spanish edition
pub fn google_news_search(query: &str) -> String {
    format!(
        "https://news.google.com/rss/search?q={}&hl=es&gl=ES&ceid=ES:es",
        urlencoding::encode(query)
    )
}

/// Per-player Google News search feeds
pub fn player_search_feeds(player: &Player) -> Vec<FeedSource> {
    vec![FeedSource::new(
        &format!("Google News - {}", player.name),
        &google_news_search(&format!("\"{}\" {}", player.name, player.club)),
    )]
}

/// Curated list of feeds for a full ingestion run
///
/// General sports dailies first, then one team-search feed per distinct
/// club, then one search feed per tracked player.
pub fn curated_feeds(roster: &[Player]) -> Vec<FeedSource> {
    let mut feeds = vec![
        FeedSource::new("Marca", "https://e00-marca.uecdn.es/rss/futbol/primera-division.xml"),
        FeedSource::new("AS", "https://as.com/rss/futbol/primera.xml"),
        FeedSource::new(
            "Mundo Deportivo",
            "https://www.mundodeportivo.com/feed/rss/futbol",
        ),
        FeedSource::new("Sport", "https://www.sport.es/es/rss/futbol/rss.xml"),
    ];

    let mut seen_clubs: Vec<&str> = Vec::new();
    for player in roster {
        if !seen_clubs.contains(&player.club.as_str()) {
            seen_clubs.push(&player.club);
            feeds.push(FeedSource::new(
                &format!("Google News - {}", player.club),
                &google_news_search(&format!("{} fútbol", player.club)),
            ));
        }
    }

    for player in roster {
        feeds.extend(player_search_feeds(player));
    }

    feeds
}
