//! Time-bucketed and brand-bucketed sentiment counts.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use revlens_core::{AnnotatedReview, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Count of one label within one calendar week (Monday start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucketCount {
    pub week_start: NaiveDate,
    pub label: SentimentLabel,
    pub count: u64,
}

/// Weekly sentiment counts, or an explicit marker that the dataset has
/// no date column at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "buckets")]
pub enum TimeSeries {
    NoDateData,
    Buckets(Vec<WeekBucketCount>),
}

/// Count of one label for one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandBucketCount {
    pub brand: String,
    pub label: SentimentLabel,
    pub count: u64,
}

/// Per-brand sentiment counts, or an explicit marker that the dataset
/// has no brand column at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "buckets")]
pub enum BrandComparison {
    NoBrandData,
    Buckets(Vec<BrandBucketCount>),
}

/// Bucket annotated rows into (calendar week, label) counts.
///
/// `has_date` distinguishes "column absent" (→ `NoDateData`) from
/// "column present but values null". Rows with a null date are
/// excluded from the series; they still count toward totals elsewhere.
/// Output is sorted by (week start, label).
#[must_use]
pub fn sentiment_over_time(rows: &[AnnotatedReview], has_date: bool) -> TimeSeries {
    if !has_date {
        return TimeSeries::NoDateData;
    }

    let mut counts: BTreeMap<(NaiveDate, SentimentLabel), u64> = BTreeMap::new();
    for row in rows {
        if let Some(date) = row.record.date {
            let week_start = date.week(Weekday::Mon).first_day();
            *counts.entry((week_start, row.sentiment.label)).or_insert(0) += 1;
        }
    }

    TimeSeries::Buckets(
        counts
            .into_iter()
            .map(|((week_start, label), count)| WeekBucketCount {
                week_start,
                label,
                count,
            })
            .collect(),
    )
}

/// Bucket annotated rows into (brand, label) counts.
///
/// Rows with a null brand are excluded. Output is sorted by
/// (brand, label).
#[must_use]
pub fn brand_comparison(rows: &[AnnotatedReview], has_brand: bool) -> BrandComparison {
    if !has_brand {
        return BrandComparison::NoBrandData;
    }

    let mut counts: BTreeMap<(String, SentimentLabel), u64> = BTreeMap::new();
    for row in rows {
        if let Some(brand) = &row.record.brand {
            *counts
                .entry((brand.clone(), row.sentiment.label))
                .or_insert(0) += 1;
        }
    }

    BrandComparison::Buckets(
        counts
            .into_iter()
            .map(|((brand, label), count)| BrandBucketCount {
                brand,
                label,
                count,
            })
            .collect(),
    )
}
