//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use crate::scoring::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub embedding: EmbeddingConfig,
    pub remote: RemoteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub default_strategy: StrategyKind,
    /// Composite blend weights; they should sum to 1.0.
    pub lexical_weight: f32,
    pub overlap_weight: f32,
    pub coverage_weight: f32,
    /// Candidates at or above this score are considered shortlisted.
    pub shortlist_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Local directory holding a Model2Vec model.
    pub model_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    /// Environment variable the API key is read from; never stored in the
    /// config file itself.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub sheet_name: String,
    /// Timestamp the default workbook filename so successive runs don't
    /// overwrite each other.
    pub timestamped_filenames: bool,
}

impl Default for Config {
    fn default() -> Self {
        let model_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-screener")
            .join("models")
            .join("minishlab_M2V_base_output");

        Self {
            scoring: ScoringConfig {
                default_strategy: StrategyKind::Lexical,
                lexical_weight: 0.5,
                overlap_weight: 0.3,
                coverage_weight: 0.2,
                shortlist_threshold: 60.0,
            },
            embedding: EmbeddingConfig { model_path },
            remote: RemoteConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "RESUME_SCREENER_API_KEY".to_string(),
                timeout_secs: 30,
            },
            output: OutputConfig {
                sheet_name: "Candidates".to_string(),
                timestamped_filenames: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
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
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.scoring.default_strategy, StrategyKind::Lexical);
        assert_eq!(parsed.scoring.lexical_weight, 0.5);
        assert_eq!(parsed.remote.timeout_secs, 30);
    }

    #[test]
    fn test_composite_weights_sum_to_one() {
        let config = Config::default();
        let sum = config.scoring.lexical_weight
            + config.scoring.overlap_weight
            + config.scoring.coverage_weight;

        assert!((sum - 1.0).abs() < f32::EPSILON);
    }
}
