//! The `analyze` command: load → normalize → score → filter →
//! keywords + aggregations → render.

mod pipeline;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use revlens_core::{load_analysis_config, load_dataset, AnalysisConfig, SentimentLabel};

use pipeline::{run_analysis, RowFilter};

/// Bundled fallback dataset used when `--input` is omitted.
const DEFAULT_INPUT: &str = "data/sample_reviews.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input CSV with columns: text (required), date, brand (optional)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the JSON report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Compound score threshold for the Positive label
    #[arg(long)]
    pub pos_threshold: Option<f64>,

    /// Compound score threshold for the Negative label
    #[arg(long, allow_negative_numbers = true)]
    pub neg_threshold: Option<f64>,

    /// Maximum keyword phrase length in words
    #[arg(long)]
    pub max_ngram: Option<usize>,

    /// Maximum number of keywords to report
    #[arg(long)]
    pub top: Option<usize>,

    /// Keyword extraction language
    #[arg(long)]
    pub language: Option<String>,

    /// Sentiment label selecting the keyword corpus
    #[arg(long)]
    pub filter_label: Option<SentimentLabel>,

    /// Restrict analysis to a brand (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Inclusive start of the date range filter (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Inclusive end of the date range filter (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl AnalyzeArgs {
    /// Merge env-derived configuration with CLI flag overrides.
    fn resolve_config(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = load_analysis_config().context("loading analysis configuration")?;
        if let Some(v) = self.pos_threshold {
            config.pos_threshold = v;
        }
        if let Some(v) = self.neg_threshold {
            config.neg_threshold = v;
        }
        if let Some(v) = self.max_ngram {
            config.max_ngram = v;
        }
        if let Some(v) = self.top {
            config.top_keywords = v;
        }
        if let Some(v) = &self.language {
            config.language = v.clone();
        }
        if let Some(v) = self.filter_label {
            config.filter_label = v;
        }
        anyhow::ensure!(
            config.pos_threshold > config.neg_threshold,
            "positive threshold ({}) must be greater than negative threshold ({})",
            config.pos_threshold,
            config.neg_threshold
        );
        Ok(config)
    }

    fn resolve_input(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.input {
            return Ok(path.clone());
        }
        let fallback = PathBuf::from(DEFAULT_INPUT);
        anyhow::ensure!(
            fallback.exists(),
            "no input given; pass --input or add {DEFAULT_INPUT}"
        );
        Ok(fallback)
    }
}

/// Run one full analysis pass and render the report.
///
/// # Errors
///
/// Returns an error on unreadable input, a missing `text` column, or
/// invalid configuration. Data-quality anomalies (unparsable dates,
/// empty keyword corpus, absent optional columns) never fail the pass.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    let input = args.resolve_input()?;

    let dataset = load_dataset(&input)
        .with_context(|| format!("loading dataset from {}", input.display()))?;
    tracing::info!(
        path = %input.display(),
        rows = dataset.len(),
        "dataset loaded"
    );

    let filter = RowFilter {
        brands: args.brands.clone(),
        from: args.from,
        to: args.to,
    };

    let report = run_analysis(&dataset, &config, &filter);
    if report.annotated.is_empty() && !dataset.is_empty() {
        println!("no data after applying filters");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => render::print_table(&report, &config),
        OutputFormat::Json => render::write_json(&report, args.output.as_deref())?,
    }

    Ok(())
}
