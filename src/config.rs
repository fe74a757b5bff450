//! Configuration management for the match scorer

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub keywords: KeywordConfig,
    pub output: OutputConfig,
}

/// Thresholds and weights for blending the TF-IDF score with skills
/// coverage. The defaults are hand-tuned against real postings; they are
/// configurable, but changing them changes score compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Below this TF-IDF score the skills-dominant fallback can kick in.
    pub tfidf_floor: f64,
    /// Coverage required (exclusive) to trigger the fallback.
    pub coverage_gate: f64,
    pub coverage_weight: f64,
    pub tfidf_weight: f64,
    /// Coverage above which the TF-IDF score earns a flat bonus.
    pub bonus_threshold: f64,
    pub coverage_bonus: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Default number of missing keywords to report.
    pub top_k: usize,
    /// Vocabulary cap for the keyword vectorizer.
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tfidf_floor: 0.1,
            coverage_gate: 0.5,
            coverage_weight: 0.8,
            tfidf_weight: 0.2,
            bonus_threshold: 0.7,
            coverage_bonus: 0.1,
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            max_features: 1000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                MatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobmatch")
            .join("config.toml")
    }
}
