//! KPI summary and the fixed managerial recommendations.

use revlens_core::{AnnotatedReview, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Headline numbers for the filtered annotated table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_records: usize,
    /// Fraction of rows labeled Positive, in `[0.0, 1.0]`.
    pub positive_rate: f64,
    /// Fraction of rows labeled Negative, in `[0.0, 1.0]`.
    pub negative_rate: f64,
}

/// Compute the KPI row. Empty input yields zero rates.
#[must_use]
pub fn compute_kpis(rows: &[AnnotatedReview]) -> Kpis {
    let total = rows.len();
    if total == 0 {
        return Kpis {
            total_records: 0,
            positive_rate: 0.0,
            negative_rate: 0.0,
        };
    }

    let count_of = |label: SentimentLabel| rows.iter().filter(|r| r.sentiment.label == label).count();

    #[allow(clippy::cast_precision_loss)]
    let denom = total as f64;
    #[allow(clippy::cast_precision_loss)]
    let positive_rate = count_of(SentimentLabel::Positive) as f64 / denom;
    #[allow(clippy::cast_precision_loss)]
    let negative_rate = count_of(SentimentLabel::Negative) as f64 / denom;

    Kpis {
        total_records: total,
        positive_rate,
        negative_rate,
    }
}

/// The fixed managerial recommendations emitted with every report.
#[must_use]
pub fn recommendations() -> &'static [&'static str] {
    &[
        "Marketing: Increase focus on themes with high negative keywords (e.g., delivery).",
        "Product: Prioritize fixes tied to frequent complaint keywords (e.g., quality).",
        "Competitive: Highlight strengths vs competitors where positive share is higher.",
        "CX: If negative spikes align with dates, audit operations and communications that week.",
    ]
}

#[cfg(test)]
mod tests {
    use revlens_core::{ReviewRecord, SentimentScores};

    use super::*;

    fn row(label: SentimentLabel) -> AnnotatedReview {
        AnnotatedReview {
            record: ReviewRecord::from_text("x"),
            sentiment: SentimentScores {
                compound: 0.0,
                pos: 0.0,
                neu: 1.0,
                neg: 0.0,
                label,
            },
        }
    }

    #[test]
    fn empty_table_has_zero_rates() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total_records, 0);
        assert!(kpis.positive_rate.abs() < f64::EPSILON);
        assert!(kpis.negative_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn rates_reflect_label_shares() {
        let rows = vec![
            row(SentimentLabel::Positive),
            row(SentimentLabel::Positive),
            row(SentimentLabel::Negative),
            row(SentimentLabel::Neutral),
        ];
        let kpis = compute_kpis(&rows);
        assert_eq!(kpis.total_records, 4);
        assert!((kpis.positive_rate - 0.5).abs() < 1e-9);
        assert!((kpis.negative_rate - 0.25).abs() < 1e-9);
    }

    #[test]
    fn recommendations_are_fixed_and_nonempty() {
        let recs = recommendations();
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| !r.is_empty()));
    }
}
