//! Statistical keyword extraction over a review corpus.
//!
//! Ports the YAKE scoring scheme: unsupervised, single-pass term
//! statistics (frequency, first position, sentence dispersion, context
//! relatedness) combined into candidate n-gram scores where lower means
//! more representative. No training data, no randomness.

pub mod extractor;
pub mod stopwords;

pub use extractor::{Keyword, KeywordExtractor, KeywordParams};
