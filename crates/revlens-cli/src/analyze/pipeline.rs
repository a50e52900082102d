//! Pure orchestration of one analysis pass.
//!
//! 1. Score every record (one annotation per row, input order).
//! 2. Apply the brand / date-range row filter.
//! 3. Extract keywords from the rows matching the corpus filter label.
//! 4. Compute the week and brand aggregations and the KPI row.
//!
//! The input dataset is never mutated; every stage produces a new
//! derived view.

use chrono::NaiveDate;
use revlens_analytics::{
    brand_comparison, compute_kpis, recommendations, sentiment_over_time, BrandComparison,
    Kpis, TimeSeries,
};
use revlens_core::{AnalysisConfig, AnnotatedReview, Dataset};
use revlens_keywords::{Keyword, KeywordExtractor, KeywordParams};
use revlens_sentiment::SentimentScorer;
use serde::Serialize;

/// Row-level filter applied after scoring, before keyword extraction
/// and aggregation. Empty `brands` means no brand restriction.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    pub brands: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RowFilter {
    fn matches(&self, row: &AnnotatedReview) -> bool {
        if !self.brands.is_empty() {
            match &row.record.brand {
                Some(brand) if self.brands.iter().any(|b| b == brand) => {}
                _ => return false,
            }
        }
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = row.record.date else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        true
    }
}

/// The three named result sets plus KPIs and recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub kpis: Kpis,
    pub annotated: Vec<AnnotatedReview>,
    pub keywords: Vec<Keyword>,
    pub time_series: TimeSeries,
    pub brand_comparison: BrandComparison,
    pub recommendations: Vec<&'static str>,
}

/// Run one full analysis pass over a normalized dataset.
///
/// Pure: identical inputs produce an identical report, and the dataset
/// is left untouched.
#[must_use]
pub fn run_analysis(
    dataset: &Dataset,
    config: &AnalysisConfig,
    filter: &RowFilter,
) -> AnalysisReport {
    let scorer = SentimentScorer::new(config.pos_threshold, config.neg_threshold);
    let annotations = scorer.annotate(&dataset.records);

    let annotated: Vec<AnnotatedReview> = dataset
        .records
        .iter()
        .zip(annotations)
        .map(|(record, sentiment)| AnnotatedReview {
            record: record.clone(),
            sentiment,
        })
        .filter(|row| filter.matches(row))
        .collect();

    let corpus: Vec<&str> = annotated
        .iter()
        .filter(|row| row.sentiment.label == config.filter_label)
        .map(|row| row.record.text.as_str())
        .collect();
    let extractor = KeywordExtractor::new(KeywordParams {
        max_ngram: config.max_ngram,
        top_n: config.top_keywords,
        language: config.language.clone(),
    });
    let keywords = extractor.extract(&corpus);

    AnalysisReport {
        kpis: compute_kpis(&annotated),
        time_series: sentiment_over_time(&annotated, dataset.has_date),
        brand_comparison: brand_comparison(&annotated, dataset.has_brand),
        keywords,
        annotated,
        recommendations: recommendations().to_vec(),
    }
}
