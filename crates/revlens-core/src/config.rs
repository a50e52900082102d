use crate::error::ConfigError;
use crate::schema::SentimentLabel;

/// Tunable parameters for one analysis pass.
///
/// Every knob has a default matching the documented contract; all are
/// overridable from environment variables and, above that, CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Compound scores at or above this threshold label Positive.
    pub pos_threshold: f64,
    /// Compound scores at or below this threshold label Negative.
    pub neg_threshold: f64,
    /// Maximum keyword phrase length in words.
    pub max_ngram: usize,
    /// Maximum number of keywords to return.
    pub top_keywords: usize,
    /// Keyword extraction language (stopword list selector).
    pub language: String,
    /// Sentiment label selecting the keyword corpus.
    pub filter_label: SentimentLabel,
    /// Log level for the tracing subscriber.
    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            pos_threshold: 0.05,
            neg_threshold: -0.05,
            max_ngram: 2,
            top_keywords: 20,
            language: "en".to_string(),
            filter_label: SentimentLabel::Negative,
            log_level: "info".to_string(),
        }
    }
}

/// Load the analysis configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
/// env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var is set to an invalid value.
pub fn load_analysis_config() -> Result<AnalysisConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_analysis_config_from_env()
}

/// Load the analysis configuration from env vars already in the process.
///
/// Unlike [`load_analysis_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var is set to an invalid value.
pub fn load_analysis_config_from_env() -> Result<AnalysisConfig, ConfigError> {
    build_analysis_config(|key| std::env::var(key))
}

/// Build the configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the real environment
/// so tests can drive it with a pure `HashMap` lookup.
fn build_analysis_config<F>(lookup: F) -> Result<AnalysisConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AnalysisConfig::default();

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let pos_threshold = parse_f64("REVLENS_POS_THRESHOLD", defaults.pos_threshold)?;
    let neg_threshold = parse_f64("REVLENS_NEG_THRESHOLD", defaults.neg_threshold)?;
    let max_ngram = parse_usize("REVLENS_MAX_NGRAM", defaults.max_ngram)?;
    let top_keywords = parse_usize("REVLENS_TOP_KEYWORDS", defaults.top_keywords)?;
    let language = or_default("REVLENS_LANGUAGE", &defaults.language);
    let log_level = or_default("REVLENS_LOG_LEVEL", &defaults.log_level);

    let filter_label = match lookup("REVLENS_FILTER_LABEL") {
        Ok(raw) => raw
            .parse::<SentimentLabel>()
            .map_err(|reason| ConfigError::InvalidEnvVar {
                var: "REVLENS_FILTER_LABEL".to_string(),
                reason,
            })?,
        Err(_) => defaults.filter_label,
    };

    if pos_threshold <= neg_threshold {
        return Err(ConfigError::ThresholdOrder {
            pos: pos_threshold,
            neg: neg_threshold,
        });
    }

    Ok(AnalysisConfig {
        pos_threshold,
        neg_threshold,
        max_ngram,
        top_keywords,
        language,
        filter_label,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_analysis_config(lookup_from_map(&map)).expect("defaults are valid");
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn thresholds_read_from_env() {
        let mut map = HashMap::new();
        map.insert("REVLENS_POS_THRESHOLD", "0.2");
        map.insert("REVLENS_NEG_THRESHOLD", "-0.3");
        let config = build_analysis_config(lookup_from_map(&map)).expect("valid overrides");
        assert!((config.pos_threshold - 0.2).abs() < f64::EPSILON);
        assert!((config.neg_threshold + 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let mut map = HashMap::new();
        map.insert("REVLENS_POS_THRESHOLD", "not-a-float");
        let result = build_analysis_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVLENS_POS_THRESHOLD"),
            "expected InvalidEnvVar(REVLENS_POS_THRESHOLD), got: {result:?}"
        );
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let mut map = HashMap::new();
        map.insert("REVLENS_POS_THRESHOLD", "-0.5");
        map.insert("REVLENS_NEG_THRESHOLD", "0.5");
        let result = build_analysis_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::ThresholdOrder { .. })),
            "expected ThresholdOrder, got: {result:?}"
        );
    }

    #[test]
    fn filter_label_parses_case_insensitively() {
        let mut map = HashMap::new();
        map.insert("REVLENS_FILTER_LABEL", "positive");
        let config = build_analysis_config(lookup_from_map(&map)).expect("valid label");
        assert_eq!(config.filter_label, SentimentLabel::Positive);
    }

    #[test]
    fn bad_filter_label_is_rejected() {
        let mut map = HashMap::new();
        map.insert("REVLENS_FILTER_LABEL", "angry");
        let result = build_analysis_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVLENS_FILTER_LABEL"),
            "expected InvalidEnvVar(REVLENS_FILTER_LABEL), got: {result:?}"
        );
    }
}
