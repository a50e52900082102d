use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentiment polarity label attached to every scored review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!(
                "unknown sentiment label '{other}' (expected Positive, Neutral, or Negative)"
            )),
        }
    }
}

/// One normalized input row.
///
/// `text` is the only required field; a missing or empty cell becomes
/// an empty string rather than an error. Columns outside the canonical
/// {date, text, brand} set are carried in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub text: String,
    pub date: Option<NaiveDate>,
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ReviewRecord {
    /// Convenience constructor for a text-only record.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        ReviewRecord {
            text: text.into(),
            date: None,
            brand: None,
            extra: BTreeMap::new(),
        }
    }
}

/// A normalized table of review records.
///
/// `columns` preserves the normalized header order: canonical columns
/// first (`date`, `text`, `brand`, whichever are present, in that fixed
/// order), then the remaining original columns in their original
/// relative order. `has_date` / `has_brand` distinguish "column absent"
/// from "column present but all values null" for the aggregations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<ReviewRecord>,
    pub columns: Vec<String>,
    pub has_date: bool,
    pub has_brand: bool,
}

impl Dataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-record sentiment annotation.
///
/// `compound` is the aggregate polarity in `[-1.0, 1.0]`; `pos`, `neu`,
/// and `neg` are fractional proportions that sum to 1.0 within floating
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub label: SentimentLabel,
}

/// One row of the annotated result table: the original record plus its
/// sentiment annotation. Derived, never written back onto the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedReview {
    #[serde(flatten)]
    pub record: ReviewRecord,
    pub sentiment: SentimentScores,
}
