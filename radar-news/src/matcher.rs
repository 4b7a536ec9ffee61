//! Entity matching for tracked players
//!
//! Articles spell player names with and without diacritics and under
//! nickname/transliteration variants, so matching is substring containment
//! over a normalized form: NFD decomposition, combining marks stripped,
//! lowercased.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::feeds::Player;

/// Normalize text for matching: strip diacritics and lowercase
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether the article text mentions the player
///
/// True if the normalized canonical name or any normalized alias occurs as
/// a substring of the normalized text. Monotone under concatenation: adding
/// text never turns a match into a non-match.
pub fn mentions_player(text: &str, player: &Player) -> bool {
    let haystack = normalize(text);
    if haystack.contains(&normalize(&player.name)) {
        return true;
    }
    player
        .aliases
        .iter()
        .any(|alias| haystack.contains(&normalize(alias)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abde() -> Player {
        Player::new(
            "Abde Ezzalzouli",
            "Real Betis",
            &["Abde", "Ezzalzouli", "Abdessamad"],
        )
    }

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize("Múnich"), "munich");
        assert_eq!(normalize("Félix Á"), "felix a");
    }

    #[test]
    fn test_matches_canonical_name_and_aliases() {
        let player = abde();
        assert!(mentions_player("Gol de Abde en el derbi", &player));
        assert!(mentions_player("EZZALZOULI titular esta noche", &player));
        assert!(mentions_player("Abdessamad Ezzalzouli renueva", &player));
        assert!(!mentions_player("El Betis empata sin goles", &player));
    }

    #[test]
    fn test_matching_is_diacritic_insensitive() {
        let player = Player::new("João Félix", "Atlético", &[]);
        assert!(mentions_player("joao felix marca doblete", &player));
    }

    #[test]
    fn test_monotone_under_concatenation() {
        let player = abde();
        let text = "Abde asiste";
        assert!(mentions_player(text, &player));
        assert!(mentions_player(&format!("{text} y algo más"), &player));
    }
}
