use thiserror::Error;

/// Errors raised while loading or normalizing an input dataset.
///
/// `MissingTextColumn` is the one structural precondition of the whole
/// pipeline; it is checked once at the dataset boundary so no row is
/// ever scored against a malformed table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("input must include a 'text' column (optional: 'date', 'brand')")]
    MissingTextColumn,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while building the analysis configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("positive threshold ({pos}) must be greater than negative threshold ({neg})")]
    ThresholdOrder { pos: f64, neg: f64 },
}
