//! Digest configuration loaded from a YAML file.
//!
//! Everything that shapes a run (keyword pairs, recipients, sender,
//! subject, the reference instant for window computation, and the shuffle
//! seed) lives in one explicit [`DigestConfig`] value that gets passed
//! into the pipeline. The pipeline itself never reads the environment or
//! the wall clock; only [`DigestConfig::reference_time`] falls back to the
//! current time when no override is configured.
//!
//! Credentials are deliberately *not* part of this file; they come in via
//! CLI flags / environment variables (see [`crate::cli::Cli`]).

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::KeywordPair;
use crate::util::kst;

/// Subject line used when the config file doesn't set one.
pub const DEFAULT_SUBJECT: &str = "뉴스 대시보드";

/// Errors raised while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Configuration for one digest run.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// Keyword pairs, in report order.
    pub keywords: Vec<KeywordPair>,
    /// Email recipients of the rendered digest.
    pub recipients: Vec<String>,
    /// Sender identity for the outgoing mail.
    pub sender: String,
    /// Subject line of the outgoing mail.
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Fixed reference instant for today/yesterday computation. Unset in
    /// production (wall clock); set in tests for reproducible windows.
    #[serde(default)]
    pub reference_time: Option<DateTime<FixedOffset>>,
    /// Fixed seed for the per-section shuffle. Unset in production.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl DigestConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&raw)?;
        info!(
            path,
            keywords = config.keywords.len(),
            recipients = config.recipients.len(),
            "Loaded digest configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string and validate it.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.keywords.is_empty() {
            return Err(ConfigError::Invalid {
                message: "at least one keyword pair is required".to_string(),
            });
        }
        for (i, pair) in self.keywords.iter().enumerate() {
            if pair.foreign.trim().is_empty() || pair.local.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: format!("keyword pair #{} has an empty term", i + 1),
                });
            }
        }
        if self.recipients.is_empty() {
            return Err(ConfigError::Invalid {
                message: "at least one recipient is required".to_string(),
            });
        }
        if self.sender.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "sender must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The instant the date window is computed from: the configured
    /// override when present, otherwise the current time in KST.
    pub fn reference_time(&self) -> DateTime<FixedOffset> {
        self.reference_time
            .unwrap_or_else(|| Utc::now().with_timezone(&kst()))
    }
}
