//! Plain-text and JSON renderers for the analysis report.

use std::path::Path;

use anyhow::Context;
use revlens_analytics::{BrandComparison, TimeSeries};
use revlens_core::AnalysisConfig;

use super::pipeline::AnalysisReport;

/// Rows of the annotated table shown in the text report.
const PREVIEW_ROWS: usize = 10;

pub(crate) fn print_table(report: &AnalysisReport, config: &AnalysisConfig) {
    println!(
        "records: {}   positive: {:.1}%   negative: {:.1}%",
        report.kpis.total_records,
        report.kpis.positive_rate * 100.0,
        report.kpis.negative_rate * 100.0
    );

    println!("\nANNOTATED REVIEWS (first {PREVIEW_ROWS})");
    println!("{:<10}{:<10}{:<10}{:<10}TEXT", "LABEL", "COMPOUND", "DATE", "BRAND");
    for row in report.annotated.iter().take(PREVIEW_ROWS) {
        let date = row
            .record
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let brand = row.record.brand.as_deref().unwrap_or("-");
        println!(
            "{:<10}{:<10.3}{:<10}{:<10}{}",
            row.sentiment.label.to_string(),
            row.sentiment.compound,
            date,
            brand,
            truncate(&row.record.text, 60)
        );
    }

    println!("\nTOP {} KEYWORDS ({})", config.top_keywords, config.filter_label);
    if report.keywords.is_empty() {
        println!("no matching reviews for keyword extraction");
    } else {
        println!("{:<30}SCORE", "KEYWORD");
        for kw in &report.keywords {
            println!("{:<30}{:.4}", kw.keyword, kw.score);
        }
    }

    println!("\nSENTIMENT BY WEEK");
    match &report.time_series {
        TimeSeries::NoDateData => println!("no date data"),
        TimeSeries::Buckets(buckets) if buckets.is_empty() => println!("no dated rows"),
        TimeSeries::Buckets(buckets) => {
            println!("{:<14}{:<10}COUNT", "WEEK", "LABEL");
            for bucket in buckets {
                println!(
                    "{:<14}{:<10}{}",
                    bucket.week_start.to_string(),
                    bucket.label.to_string(),
                    bucket.count
                );
            }
        }
    }

    println!("\nBRAND COMPARISON");
    match &report.brand_comparison {
        BrandComparison::NoBrandData => println!("no brand data"),
        BrandComparison::Buckets(buckets) if buckets.is_empty() => println!("no branded rows"),
        BrandComparison::Buckets(buckets) => {
            println!("{:<20}{:<10}COUNT", "BRAND", "LABEL");
            for bucket in buckets {
                println!(
                    "{:<20}{:<10}{}",
                    bucket.brand,
                    bucket.label.to_string(),
                    bucket.count
                );
            }
        }
    }

    println!("\nRECOMMENDATIONS");
    for rec in &report.recommendations {
        println!("- {rec}");
    }
}

/// Serialize the full report as pretty JSON, to stdout or a file.
pub(crate) fn write_json(report: &AnalysisReport, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}
