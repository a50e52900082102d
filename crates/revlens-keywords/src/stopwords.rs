//! Stopword lists keyed by language code.

use std::collections::HashSet;

/// English stopwords.
///
/// Function words never form keyword candidates; a candidate window
/// containing any of these is rejected outright.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Return the stopword set for a language code.
///
/// Only English is bundled; unrecognized codes fall back to the
/// English list with a warning rather than failing the pass.
#[must_use]
pub fn for_language(language: &str) -> HashSet<&'static str> {
    if !language.eq_ignore_ascii_case("en") {
        tracing::warn!(
            language,
            "no stopword list bundled for this language; falling back to English"
        );
    }
    ENGLISH.iter().copied().collect()
}
