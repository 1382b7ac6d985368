//! @ai:module:intent Configuration structs for the translation benchmark analyzer
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalyzerConfig, InputConfig, FailureConfig, PathConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for the analyzer
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub failure: FailureConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent Column conventions for translation result CSV files
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Model whose column serves as the reference translation.
    #[serde(default = "default_reference_model")]
    pub reference_model: String,
    /// Prefix of per-model candidate columns; the remainder is the model name.
    #[serde(default = "default_candidate_prefix")]
    pub candidate_prefix: String,
    #[serde(default = "default_latency_prefix")]
    pub latency_prefix: String,
    #[serde(default = "default_latency_suffix")]
    pub latency_suffix: String,
}

/// @ai:intent Failure detection policy as data
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureConfig {
    /// Substrings marking a candidate as a mocked, failed or truncated response.
    #[serde(default = "default_sentinels")]
    pub sentinels: Vec<String>,
}

/// @ai:intent Path configuration for input/output directories
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub data_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reference_model: default_reference_model(),
            candidate_prefix: default_candidate_prefix(),
            latency_prefix: default_latency_prefix(),
            latency_suffix: default_latency_suffix(),
        }
    }
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self {
            sentinels: default_sentinels(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
        }
    }
}

fn default_reference_model() -> String {
    "GPT-4.1".to_string()
}

fn default_candidate_prefix() -> String {
    "Spanish-".to_string()
}

fn default_latency_prefix() -> String {
    "Latency-".to_string()
}

fn default_latency_suffix() -> String {
    " (ms)".to_string()
}

fn default_sentinels() -> Vec<String> {
    vec![
        "Mock]".to_string(),
        "API call failed".to_string(),
        "Translation truncated".to_string(),
    ]
}

impl AnalyzerConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl InputConfig {
    /// @ai:intent Latency column name for a model
    /// @ai:effects pure
    pub fn latency_column(&self, model: &str) -> String {
        format!("{}{}{}", self.latency_prefix, model, self.latency_suffix)
    }

    /// @ai:intent Candidate column name for a model
    /// @ai:effects pure
    pub fn candidate_column(&self, model: &str) -> String {
        format!("{}{}", self.candidate_prefix, model)
    }
}
