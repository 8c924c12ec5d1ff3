use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::topics::distribution::ConfidenceThresholds;

/// Default HTTP port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare checkout with the artifacts in the
/// working directory runs without any configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exported LDA model (BATMI_MODEL_PATH)
    pub model_path: PathBuf,
    /// Token → id vocabulary the model was trained with (BATMI_DICTIONARY_PATH)
    pub dictionary_path: PathBuf,
    /// Newline-delimited Marathi stopword list (BATMI_STOPWORDS_PATH)
    pub stopwords_path: PathBuf,
    /// Cutoffs for the confident label set (BATMI_TOP{1,2,3}_THRESHOLD)
    pub thresholds: ConfidenceThresholds,
    /// Port for `serve` (PORT)
    pub port: u16,
    /// Bind address for `serve` (BATMI_BIND)
    pub bind: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = ConfidenceThresholds::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            model_path: path_var("BATMI_MODEL_PATH", "./lda_model.json"),
            dictionary_path: path_var("BATMI_DICTIONARY_PATH", "./dictionary.json"),
            stopwords_path: path_var("BATMI_STOPWORDS_PATH", "./marathi_stopwords.txt"),
            thresholds: ConfidenceThresholds {
                top1: threshold_var("BATMI_TOP1_THRESHOLD", defaults.top1)?,
                top2: threshold_var("BATMI_TOP2_THRESHOLD", defaults.top2)?,
                top3: threshold_var("BATMI_TOP3_THRESHOLD", defaults.top3)?,
            },
            port,
            bind: env::var("BATMI_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
        })
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn threshold_var(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(raw) => parse_threshold(name, &raw),
        Err(_) => Ok(default),
    }
}

/// Parse a probability threshold, rejecting anything outside [0, 1].
pub fn parse_threshold(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a number, got {raw:?}"))?;
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("{name} must be between 0 and 1, got {value}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_accepts_probabilities() {
        assert_eq!(parse_threshold("T", "0.7").unwrap(), 0.7);
        assert_eq!(parse_threshold("T", " 1 ").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range() {
        assert!(parse_threshold("T", "1.5").is_err());
        assert!(parse_threshold("T", "-0.1").is_err());
        assert!(parse_threshold("T", "NaN").is_err());
        assert!(parse_threshold("T", "high").is_err());
    }
}
