//! Top-level scrutin configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, AmbiguityPolicy, CompletionConfig, ObservabilityConfig, PipelineConfig,
    RetrievalConfig, StorageConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SCRUTIN_*`)
/// 2. Project config (`scrutin.toml` in the config root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScrutinConfig {
    pub storage: StorageConfig,
    pub completion: CompletionConfig,
    pub retrieval: RetrievalConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl ScrutinConfig {
    /// Load configuration from `root/scrutin.toml` (if present) and the environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }
        if self.retrieval.k1 <= 0.0 {
            return Err(invalid("retrieval.k1", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.retrieval.b) {
            return Err(invalid("retrieval.b", "must be between 0.0 and 1.0"));
        }
        if self.retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if self.pipeline.row_limit == 0 {
            return Err(invalid("pipeline.row_limit", "must be at least 1"));
        }
        if self.completion.endpoint.trim().is_empty() {
            return Err(invalid("completion.endpoint", "must not be empty"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `SCRUTIN_DB_PATH`, `SCRUTIN_COMPLETION_MODEL`, etc.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SCRUTIN_DB_PATH") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("SCRUTIN_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                self.storage.read_pool_size = v;
            }
        }
        if let Ok(val) = std::env::var("SCRUTIN_COMPLETION_ENDPOINT") {
            self.completion.endpoint = val;
        }
        if let Ok(val) = std::env::var("SCRUTIN_COMPLETION_MODEL") {
            self.completion.model = val;
        }
        if let Ok(val) = std::env::var("SCRUTIN_COMPLETION_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.completion.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("SCRUTIN_CORPUS_PATH") {
            self.retrieval.corpus_path = Some(val);
        }
        if let Ok(val) = std::env::var("SCRUTIN_AMBIGUITY_POLICY") {
            match val.as_str() {
                "prefer_allowed" => self.pipeline.ambiguity_policy = AmbiguityPolicy::PreferAllowed,
                "prefer_ambiguous" => {
                    self.pipeline.ambiguity_policy = AmbiguityPolicy::PreferAmbiguous
                }
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("SCRUTIN_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("SCRUTIN_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
