//! Keyword-based sentiment scoring
//!
//! Bag-of-keywords over fixed Spanish term lists: +1 per distinct positive
//! term present, -1 per distinct negative term present, label = sign of the
//! sum. Deliberately unweighted, with no stemming or negation handling;
//! this is naive by design, not an approximation of something smarter.

use radar_core::Sentiment;

/// Terms that count toward a positive score
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "gol",
    "golazo",
    "doblete",
    "asistencia",
    "victoria",
    "triunfo",
    "titular",
    "brillante",
    "figura",
    "clave",
    "destacado",
    "elogios",
    "renovación",
    "renovacion",
    "convocado",
    "recuperado",
    "mvp",
];

/// Terms that count toward a negative score
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "lesión",
    "lesion",
    "lesionado",
    "derrota",
    "suplente",
    "expulsión",
    "expulsado",
    "sanción",
    "sancionado",
    "polémica",
    "crisis",
    "descartado",
    "silbidos",
    "fallo",
    "error",
];

/// The keyword lists driving the scorer
///
/// Immutable configuration, built once at process start and passed into the
/// pipeline so tests can substitute fixture lists without touching the
/// scoring logic.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            negative: NEGATIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SentimentLexicon {
    /// Score an article text
    pub fn score(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let mut score = 0i32;
        for term in &self.positive {
            if lower.contains(term.as_str()) {
                score += 1;
            }
        }
        for term in &self.negative {
            if lower.contains(term.as_str()) {
                score -= 1;
            }
        }
        Sentiment::from_score(score)
    }

    /// Distinct sentiment keywords present in the text, from either list
    ///
    /// Feeds the top-keywords metric: each term counts once per article no
    /// matter how often it occurs.
    pub fn keyword_hits(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.positive
            .iter()
            .chain(self.negative.iter())
            .filter(|term| lower.contains(term.as_str()))
            .map(String::as_str)
            .collect()
    }
}
