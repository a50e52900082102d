//! Core types for the review sentiment pipeline.
//!
//! Defines the normalized dataset schema, the CSV loader/normalizer,
//! the analysis configuration surface, and the shared error types used
//! by the scoring, keyword, and aggregation crates.

pub mod config;
pub mod error;
pub mod loader;
pub mod schema;

pub use config::{load_analysis_config, load_analysis_config_from_env, AnalysisConfig};
pub use error::{ConfigError, DatasetError};
pub use loader::{load_dataset, normalize};
pub use schema::{AnnotatedReview, Dataset, ReviewRecord, SentimentLabel, SentimentScores};
