//! VADER-style sentiment scorer with the configurable labeling rule.

use std::collections::HashMap;

use revlens_core::{ReviewRecord, SentimentLabel, SentimentScores};

use crate::lexicon::{BOOSTERS, DAMPENERS, LEXICON, NEGATORS};

/// Booster/dampener increment applied to a nearby sentiment word.
const MODIFIER_INCREMENT: f64 = 0.293;
/// Valence multiplier applied when a negator precedes a sentiment word.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Emphasis added per trailing exclamation mark (capped at four).
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// Booster influence decay by distance from the sentiment word.
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Lexicon-based polarity scorer.
///
/// Construct once and pass by reference; scoring holds no mutable
/// state, so one instance can serve any number of records.
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
    pos_threshold: f64,
    neg_threshold: f64,
}

impl SentimentScorer {
    /// Build a scorer with explicit labeling thresholds.
    #[must_use]
    pub fn new(pos_threshold: f64, neg_threshold: f64) -> Self {
        SentimentScorer {
            lexicon: LEXICON.iter().copied().collect(),
            pos_threshold,
            neg_threshold,
        }
    }

    /// Map a compound score to a label.
    ///
    /// Both thresholds are inclusive: `compound == pos_threshold` is
    /// Positive and `compound == neg_threshold` is Negative; the
    /// Neutral band is the open interval strictly between them.
    #[must_use]
    pub fn label_for_compound(&self, compound: f64) -> SentimentLabel {
        if compound >= self.pos_threshold {
            SentimentLabel::Positive
        } else if compound <= self.neg_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Score one text.
    ///
    /// Empty or unscoreable text yields `compound == 0.0`, `neu == 1.0`
    /// and a Neutral label; it is never an error.
    #[must_use]
    pub fn score(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores {
                compound: 0.0,
                pos: 0.0,
                neu: 1.0,
                neg: 0.0,
                label: self.label_for_compound(0.0),
            };
        }

        let valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| self.token_valence(&tokens, idx, token))
            .collect();

        let mut sum: f64 = valences.iter().sum();

        // Trailing exclamation marks amplify whichever polarity won.
        #[allow(clippy::cast_precision_loss)]
        let exclamations = text.matches('!').count().min(4) as f64;
        let emphasis = exclamations * EXCLAMATION_INCREMENT;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let compound = normalize_compound(sum);
        let (pos, neu, neg) = proportions(&valences);

        SentimentScores {
            compound,
            pos,
            neu,
            neg,
            label: self.label_for_compound(compound),
        }
    }

    /// Score a batch of records.
    ///
    /// Produces exactly one annotation per record, in input order.
    /// Records are scored independently; there is no cross-record
    /// state, so callers may chunk or parallelize freely as long as
    /// results are re-joined by index.
    #[must_use]
    pub fn annotate(&self, records: &[ReviewRecord]) -> Vec<SentimentScores> {
        let annotations: Vec<SentimentScores> =
            records.iter().map(|r| self.score(&r.text)).collect();
        tracing::debug!(records = records.len(), "scored sentiment batch");
        annotations
    }

    /// Resolve the valence of one token, applying negation and
    /// booster/dampener modifiers from up to three preceding tokens.
    fn token_valence(&self, tokens: &[String], idx: usize, token: &str) -> f64 {
        let Some(&base) = self.lexicon.get(token) else {
            return 0.0;
        };

        let mut valence = base;
        for (step, decay) in DISTANCE_DECAY.iter().enumerate() {
            let Some(prev_idx) = idx.checked_sub(step + 1) else {
                break;
            };
            let prev = tokens[prev_idx].as_str();
            if NEGATORS.contains(&prev) {
                valence *= NEGATION_SCALAR;
            } else if BOOSTERS.contains(&prev) {
                valence += valence.signum() * MODIFIER_INCREMENT * decay;
            } else if DAMPENERS.contains(&prev) {
                valence -= valence.signum() * MODIFIER_INCREMENT * decay;
            }
        }
        valence
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        SentimentScorer::new(0.05, -0.05)
    }
}

/// Lowercase word tokens with surrounding punctuation stripped.
/// Inner apostrophes survive so contractions match the negator list.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Squash the raw valence sum into `[-1.0, 1.0]`.
fn normalize_compound(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Split token valences into pos/neu/neg proportions summing to 1.0.
fn proportions(valences: &[f64]) -> (f64, f64, f64) {
    let mut pos_sum = 0.0_f64;
    let mut neg_sum = 0.0_f64;
    let mut neu_count = 0.0_f64;

    for &v in valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v.abs() + 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    let total = pos_sum + neg_sum + neu_count;
    if total <= 0.0 {
        return (0.0, 1.0, 0.0);
    }
    (pos_sum / total, neu_count / total, neg_sum / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn scorer() -> SentimentScorer {
        SentimentScorer::default()
    }

    #[test]
    fn empty_text_is_neutral() {
        let scores = scorer().score("");
        assert_eq!(scores.label, SentimentLabel::Neutral);
        assert!(scores.compound.abs() < TOLERANCE);
        assert!((scores.neu - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn whitespace_only_text_is_neutral() {
        let scores = scorer().score("   \t  ");
        assert_eq!(scores.label, SentimentLabel::Neutral);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let scores = scorer().score("the quick brown fox jumps");
        // "quick" carries a small positive valence; strip it out.
        let scores_plain = scorer().score("the brown fox jumps");
        assert!(scores_plain.compound.abs() < TOLERANCE);
        assert!(scores.compound >= scores_plain.compound);
    }

    #[test]
    fn positive_text_labels_positive() {
        let scores = scorer().score("Great product, fast delivery");
        assert_eq!(scores.label, SentimentLabel::Positive);
        assert!(scores.compound > 0.05);
    }

    #[test]
    fn negative_text_labels_negative() {
        let scores = scorer().score("Terrible quality, broke immediately");
        assert_eq!(scores.label, SentimentLabel::Negative);
        assert!(scores.compound < -0.05);
    }

    #[test]
    fn proportions_sum_to_one_for_varied_texts() {
        for text in [
            "",
            "great",
            "terrible",
            "great but terrible",
            "the weather is unremarkable today",
            "I really love this, but the delivery was very slow!",
        ] {
            let scores = scorer().score(text);
            let sum = scores.pos + scores.neu + scores.neg;
            assert!(
                (sum - 1.0).abs() < TOLERANCE,
                "pos+neu+neg = {sum} for {text:?}"
            );
            assert!(scores.compound >= -1.0 && scores.compound <= 1.0);
        }
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = scorer().score("the product is good");
        let negated = scorer().score("the product is not good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0, "got {}", negated.compound);
    }

    #[test]
    fn booster_amplifies_valence() {
        let plain = scorer().score("good");
        let boosted = scorer().score("very good");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn dampener_reduces_valence() {
        let plain = scorer().score("good");
        let dampened = scorer().score("slightly good");
        assert!(dampened.compound < plain.compound);
        assert!(dampened.compound > 0.0);
    }

    #[test]
    fn exclamations_amplify_but_never_flip() {
        let plain = scorer().score("this is great");
        let emphatic = scorer().score("this is great!!!");
        assert!(emphatic.compound > plain.compound);

        let neutral = scorer().score("this is a box!!!");
        assert!(neutral.compound.abs() < TOLERANCE);
    }

    #[test]
    fn boundary_compound_values_label_inclusively() {
        let s = scorer();
        assert_eq!(s.label_for_compound(0.05), SentimentLabel::Positive);
        assert_eq!(s.label_for_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(s.label_for_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(s.label_for_compound(0.049), SentimentLabel::Neutral);
        assert_eq!(s.label_for_compound(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn custom_thresholds_shift_the_neutral_band() {
        let strict = SentimentScorer::new(0.5, -0.5);
        assert_eq!(strict.label_for_compound(0.3), SentimentLabel::Neutral);
        assert_eq!(strict.label_for_compound(0.5), SentimentLabel::Positive);
    }

    #[test]
    fn annotate_preserves_count_and_order() {
        let records = vec![
            ReviewRecord::from_text("great product"),
            ReviewRecord::from_text("terrible product"),
            ReviewRecord::from_text("a product"),
        ];
        let annotations = scorer().annotate(&records);
        assert_eq!(annotations.len(), records.len());
        assert_eq!(annotations[0].label, SentimentLabel::Positive);
        assert_eq!(annotations[1].label, SentimentLabel::Negative);
        assert_eq!(annotations[2].label, SentimentLabel::Neutral);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "really love it, but support was very rude!";
        let first = scorer().score(text);
        let second = scorer().score(text);
        assert_eq!(first, second);
    }
}
