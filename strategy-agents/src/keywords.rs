//! Keyword scanning used by every persona to pick a reply.
//!
//! Matching is plain substring containment on the lower-cased message, so
//! `"ai"` also matches `"maintain"`. Routes are checked in order and the
//! first hit wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// A topic and the keywords that select it.
pub type Route<T> = (T, &'static [&'static str]);

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static regex"));

/// Words ignored by [`extract_keywords`].
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an",
    "as", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can",
];

/// True if `haystack` contains any of `keywords`. Callers lower-case first.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Return the first topic whose keywords appear in `message`.
pub fn classify<T: Copy>(message: &str, routes: &[Route<T>]) -> Option<T> {
    let lower = message.to_lowercase();
    routes
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(topic, _)| *topic)
}

/// Pull distinct, meaningful words out of free text (first-seen order).
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Topic {
        Pricing,
        Market,
    }

    const ROUTES: &[Route<Topic>] = &[
        (Topic::Pricing, &["pricing", "price"]),
        (Topic::Market, &["market", "industry"]),
    ];

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("What PRICE should we charge?", ROUTES), Some(Topic::Pricing));
    }

    #[test]
    fn classify_first_route_wins() {
        assert_eq!(classify("market pricing", ROUTES), Some(Topic::Pricing));
    }

    #[test]
    fn classify_no_match() {
        assert_eq!(classify("hello there", ROUTES), None);
    }

    #[test]
    fn containment_is_substring_based() {
        assert!(contains_any("we must maintain it", &["ai"]));
        assert!(!contains_any("", &["ai"]));
    }

    #[test]
    fn extract_keywords_drops_stop_words_and_short_words() {
        let words = extract_keywords("Build an AI tutor for the kids, an AI tutor!");
        assert_eq!(words, vec!["build", "tutor", "kids"]);
    }

    #[test]
    fn extract_keywords_empty() {
        assert!(extract_keywords("  ,, ").is_empty());
    }
}
