//! Configuration loading utilities

use crate::Config;
use newsdesk_common::NewsdeskError;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "NEWSDESK_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for NewsdeskError {
    fn from(err: ConfigError) -> Self {
        NewsdeskError::config_with_source("Configuration loading error", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!(path = %path.as_ref().display(), "Loading configuration file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate_all()?;

        Ok(config)
    }

    /// Parse a YAML document without applying overrides or validation
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from the environment, the working directory, or defaults
    pub fn load() -> newsdesk_common::Result<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new("newsdesk.yaml").exists() {
            Self::load_config("newsdesk.yaml")?
        } else if Path::new("newsdesk.yml").exists() {
            Self::load_config("newsdesk.yml")?
        } else {
            info!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> newsdesk_common::Result<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply overrides read through `lookup`, normally `std::env::var`
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("NEWSDESK_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("NEWSDESK_LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Some(file) = lookup("NEWSDESK_VOCABULARY_FILE") {
            config.labels.vocabulary_file = Some(file);
        }

        if let Some(ttl) = lookup("NEWSDESK_CACHE_TTL") {
            config.labels.cache_ttl_seconds = ttl.parse().map_err(|e| ConfigError::EnvParseError {
                var: "NEWSDESK_CACHE_TTL".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(order) = lookup("NEWSDESK_SORT_ORDER") {
            config.report.default_sort_order = order;
        }

        if let Some(chart_type) = lookup("NEWSDESK_CHART_TYPE") {
            config.report.default_chart_type = chart_type;
        }

        Ok(())
    }
}
