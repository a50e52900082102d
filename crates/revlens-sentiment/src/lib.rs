//! Lexicon/rule-based sentiment scoring for review text.
//!
//! Ports the VADER scoring scheme: a valence lexicon, negation damping,
//! booster adverbs, exclamation emphasis, and the `s / sqrt(s^2 + 15)`
//! compound normalization. Scoring is pure and per-record; batches
//! produce one annotation per input row in input order.

pub mod lexicon;
pub mod scorer;

pub use scorer::SentimentScorer;
