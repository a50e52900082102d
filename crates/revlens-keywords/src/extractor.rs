//! YAKE-style candidate scoring.
//!
//! Term weights combine first-occurrence position, normalized
//! frequency, context relatedness, and sentence dispersion; candidate
//! phrases up to `max_ngram` words are scored so that lower is better.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::stopwords;

/// Parameters for one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordParams {
    /// Maximum phrase length in words.
    pub max_ngram: usize,
    /// Maximum number of keywords returned.
    pub top_n: usize,
    /// Stopword language code.
    pub language: String,
}

impl Default for KeywordParams {
    fn default() -> Self {
        KeywordParams {
            max_ngram: 2,
            top_n: 20,
            language: "en".to_string(),
        }
    }
}

/// One ranked keyword phrase. Lower `score` = more representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub score: f64,
}

/// Statistical keyword extractor.
///
/// Stateless across calls; the same input corpus and parameters always
/// produce the same output (ties break lexicographically).
pub struct KeywordExtractor {
    params: KeywordParams,
    stopwords: HashSet<&'static str>,
}

#[derive(Default)]
struct TermStats {
    tf: f64,
    first_sentence: usize,
    sentences: HashSet<usize>,
    left_neighbors: HashSet<String>,
    left_total: f64,
    right_neighbors: HashSet<String>,
    right_total: f64,
}

impl KeywordExtractor {
    #[must_use]
    pub fn new(params: KeywordParams) -> Self {
        let stopwords = stopwords::for_language(&params.language);
        KeywordExtractor { params, stopwords }
    }

    /// Extract ranked keywords from a corpus of review texts.
    ///
    /// Each corpus entry is its own sentence boundary, so a phrase can
    /// never bridge two unrelated reviews. An empty corpus yields an
    /// empty result, never an error. Output is sorted ascending by
    /// score and truncated to `top_n`.
    #[must_use]
    pub fn extract(&self, corpus: &[&str]) -> Vec<Keyword> {
        let sentences = self.split_sentences(corpus);
        if sentences.is_empty() {
            return Vec::new();
        }

        let weights = self.term_weights(&sentences);
        let candidates = self.candidate_phrases(&sentences);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut keywords: Vec<Keyword> = candidates
            .into_iter()
            .map(|(phrase, tf)| {
                let terms: Vec<&str> = phrase.split(' ').collect();
                let product: f64 = terms.iter().map(|t| weights[*t]).product();
                let sum: f64 = terms.iter().map(|t| weights[*t]).sum();
                let score = product / (tf * (1.0 + sum));
                Keyword {
                    keyword: phrase,
                    score,
                }
            })
            .collect();

        keywords.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
        keywords.truncate(self.params.top_n);

        tracing::debug!(keywords = keywords.len(), "extracted keyword candidates");
        keywords
    }

    /// Split the corpus into tokenized sentences.
    ///
    /// Boundaries: corpus entry, newline, and terminal punctuation.
    fn split_sentences(&self, corpus: &[&str]) -> Vec<Vec<String>> {
        let mut sentences = Vec::new();
        for entry in corpus {
            for line in entry.lines() {
                for raw in line.split(['.', '!', '?', ';']) {
                    let tokens = tokenize(raw);
                    if !tokens.is_empty() {
                        sentences.push(tokens);
                    }
                }
            }
        }
        sentences
    }

    /// Compute the YAKE-style weight for every candidate term.
    ///
    /// Lower weight = more significant term.
    fn term_weights(&self, sentences: &[Vec<String>]) -> HashMap<String, f64> {
        let mut stats: HashMap<String, TermStats> = HashMap::new();

        for (s_idx, sentence) in sentences.iter().enumerate() {
            for (t_idx, token) in sentence.iter().enumerate() {
                let entry = stats.entry(token.clone()).or_insert_with(|| TermStats {
                    first_sentence: s_idx,
                    ..TermStats::default()
                });
                entry.tf += 1.0;
                entry.sentences.insert(s_idx);
                if t_idx > 0 {
                    entry.left_neighbors.insert(sentence[t_idx - 1].clone());
                    entry.left_total += 1.0;
                }
                if t_idx + 1 < sentence.len() {
                    entry.right_neighbors.insert(sentence[t_idx + 1].clone());
                    entry.right_total += 1.0;
                }
            }
        }

        let content_tfs: Vec<f64> = stats
            .iter()
            .filter(|(term, _)| !self.is_excluded(term))
            .map(|(_, s)| s.tf)
            .collect();
        let (mean, std) = mean_std(&content_tfs);
        let max_tf = content_tfs.iter().copied().fold(1.0_f64, f64::max);

        #[allow(clippy::cast_precision_loss)]
        let sentence_count = sentences.len() as f64;

        stats
            .into_iter()
            .map(|(term, s)| {
                #[allow(clippy::cast_precision_loss)]
                let position = (3.0 + s.first_sentence as f64).ln().ln();
                let frequency = s.tf / (mean + std).max(f64::MIN_POSITIVE);

                #[allow(clippy::cast_precision_loss)]
                let distinct_left = s.left_neighbors.len() as f64;
                #[allow(clippy::cast_precision_loss)]
                let distinct_right = s.right_neighbors.len() as f64;
                let left_ratio = if s.left_total > 0.0 {
                    distinct_left / s.left_total
                } else {
                    0.0
                };
                let right_ratio = if s.right_total > 0.0 {
                    distinct_right / s.right_total
                } else {
                    0.0
                };
                let relatedness = 1.0 + (left_ratio + right_ratio) * s.tf / max_tf;

                #[allow(clippy::cast_precision_loss)]
                let dispersion = s.sentences.len() as f64 / sentence_count;

                let weight =
                    (relatedness * position) / (frequency / relatedness + dispersion / relatedness);
                (term, weight)
            })
            .collect()
    }

    /// Collect candidate phrases with their frequencies.
    ///
    /// Windows of 1..=`max_ngram` contiguous tokens within a single
    /// sentence; any window containing a stopword, single-character, or
    /// purely numeric token is rejected.
    fn candidate_phrases(&self, sentences: &[Vec<String>]) -> HashMap<String, f64> {
        let mut candidates: HashMap<String, f64> = HashMap::new();
        for sentence in sentences {
            for size in 1..=self.params.max_ngram.max(1) {
                for window in sentence.windows(size) {
                    if window.iter().any(|t| self.is_excluded(t)) {
                        continue;
                    }
                    *candidates.entry(window.join(" ")).or_insert(0.0) += 1.0;
                }
            }
        }
        candidates
    }

    fn is_excluded(&self, token: &str) -> bool {
        self.stopwords.contains(token)
            || token.chars().count() < 2
            || token.chars().all(char::is_numeric)
    }
}

/// Lowercase alphanumeric tokens; everything else is a separator.
fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

/// Mean and population standard deviation.
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(KeywordParams::default())
    }

    #[test]
    fn empty_corpus_yields_empty_result() {
        assert!(extractor().extract(&[]).is_empty());
        assert!(extractor().extract(&["", "   "]).is_empty());
    }

    #[test]
    fn stopword_only_corpus_yields_empty_result() {
        assert!(extractor().extract(&["the and of", "is it"]).is_empty());
    }

    #[test]
    fn results_are_sorted_ascending_by_score() {
        let corpus = [
            "battery life is terrible",
            "battery life drains fast",
            "screen is fine but battery life disappoints",
        ];
        let keywords = extractor().extract(&corpus);
        assert!(!keywords.is_empty());
        for pair in keywords.windows(2) {
            assert!(
                pair[0].score <= pair[1].score,
                "not ascending: {} ({}) before {} ({})",
                pair[0].keyword,
                pair[0].score,
                pair[1].keyword,
                pair[1].score
            );
        }
    }

    #[test]
    fn top_n_truncates_the_result() {
        let params = KeywordParams {
            top_n: 5,
            ..KeywordParams::default()
        };
        let corpus = ["delivery was slow", "packaging was damaged", "support never replied, product arrived broken"];
        let keywords = KeywordExtractor::new(params).extract(&corpus);
        assert!(keywords.len() <= 5, "got {} keywords", keywords.len());
    }

    #[test]
    fn phrases_never_contain_stopwords() {
        let corpus = ["the battery is terrible and the screen is worse"];
        let keywords = extractor().extract(&corpus);
        let stops = stopwords::for_language("en");
        for kw in &keywords {
            for word in kw.keyword.split(' ') {
                assert!(!stops.contains(word), "stopword {word:?} in {:?}", kw.keyword);
            }
        }
    }

    #[test]
    fn phrases_never_bridge_corpus_entries() {
        let corpus = ["great battery", "life changing service"];
        let keywords = extractor().extract(&corpus);
        assert!(
            keywords.iter().all(|k| k.keyword != "battery life"),
            "phrase bridged two entries: {keywords:?}"
        );
    }

    #[test]
    fn phrases_never_cross_sentence_punctuation() {
        let corpus = ["arrived broken. replacement arrived fast"];
        let keywords = extractor().extract(&corpus);
        assert!(keywords.iter().all(|k| k.keyword != "broken replacement"));
    }

    #[test]
    fn respects_max_ngram() {
        let params = KeywordParams {
            max_ngram: 1,
            ..KeywordParams::default()
        };
        let corpus = ["terrible quality broke immediately"];
        let keywords = KeywordExtractor::new(params).extract(&corpus);
        assert!(!keywords.is_empty());
        assert!(keywords.iter().all(|k| !k.keyword.contains(' ')));
    }

    #[test]
    fn extraction_is_deterministic() {
        let corpus = [
            "terrible quality broke immediately",
            "delivery took forever and packaging was damaged",
            "battery life is a joke",
        ];
        let first = extractor().extract(&corpus);
        let second = extractor().extract(&corpus);
        assert_eq!(first, second);
    }

    #[test]
    fn negative_review_phrases_surface() {
        let corpus = ["Terrible quality, broke immediately"];
        let keywords = extractor().extract(&corpus);
        assert!(!keywords.is_empty());
        let surfaces: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert!(
            surfaces.contains(&"terrible quality") || surfaces.contains(&"broke immediately"),
            "expected a complaint phrase, got: {surfaces:?}"
        );
    }

    #[test]
    fn repeated_phrase_outranks_one_off_phrase() {
        let corpus = [
            "battery life is terrible",
            "battery life disappoints",
            "battery life ruined the trip",
            "packaging was damaged",
        ];
        let keywords = extractor().extract(&corpus);
        let rank = |phrase: &str| keywords.iter().position(|k| k.keyword == phrase);
        let battery = rank("battery life").expect("battery life extracted");
        let packaging = rank("packaging").unwrap_or(usize::MAX);
        assert!(
            battery < packaging,
            "expected repeated phrase first: {keywords:?}"
        );
    }
}
