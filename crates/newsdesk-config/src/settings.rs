//! Application configuration structures

use newsdesk_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Chart and report defaults
    #[validate]
    pub report: ReportSettings,

    /// Label provider settings
    #[validate]
    pub labels: LabelSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Defaults applied when a report request leaves presentation options unset
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportSettings {
    /// Chart type used when the request does not name one
    #[validate(length(min = 1, message = "Default chart type cannot be empty"))]
    pub default_chart_type: String,

    /// Sort order used when the request does not name one
    #[validate(custom(
        function = "crate::validation::validate_sort_order",
        message = "Sort order must be 'asc' or 'desc'"
    ))]
    pub default_sort_order: String,

    /// Series name for single-source charts and the y-axis title
    #[validate(length(min = 1, message = "Series label cannot be empty"))]
    pub series_label: String,

    /// Header of the trailing total column in multi-source tables
    #[validate(length(min = 1, message = "Total label cannot be empty"))]
    pub total_label: String,
}

/// Label provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LabelSettings {
    /// Vocabulary store document (YAML or JSON)
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Vocabulary file path contains invalid characters"
    ))]
    pub vocabulary_file: Option<String>,

    /// How long a loaded translation stays cached
    #[validate(range(min = 1, max = 86400, message = "Cache TTL must be between 1 and 86400 seconds"))]
    pub cache_ttl_seconds: u64,

    /// Maximum number of cached translations
    #[validate(range(min = 1, max = 100000, message = "Cache capacity must be between 1 and 100000"))]
    pub cache_capacity: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Output format
    pub format: LogFormat,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Log file path contains invalid characters"
    ))]
    pub file: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_chart_type: "bar".to_string(),
            default_sort_order: "desc".to_string(),
            series_label: "Published Stories".to_string(),
            total_label: "Total Stories".to_string(),
        }
    }
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            vocabulary_file: None,
            cache_ttl_seconds: 3600,
            cache_capacity: 1000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert into the subscriber configuration understood by `newsdesk_common::init_logging`
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.report.series_label, "Published Stories");
        assert_eq!(config.report.total_label, "Total Stories");
        assert_eq!(config.labels.cache_ttl_seconds, 3600);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("report:\n  default_chart_type: column\n").unwrap();
        assert_eq!(config.report.default_chart_type, "column");
        assert_eq!(config.report.default_sort_order, "desc");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.report.default_sort_order = "sideways".to_string();
        assert!(config.validate_all().is_err());

        let mut config = Config::default();
        config.labels.cache_ttl_seconds = 0;
        assert!(config.validate_all().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate_all().is_err());

        let mut config = Config::default();
        config.labels.vocabulary_file = Some("vocab|file.yaml".to_string());
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_logging_settings_conversion() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            format: LogFormat::Json,
            file: Some("/tmp/newsdesk.log".to_string()),
        };
        let config = settings.to_logging_config();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_path.as_deref(), Some("/tmp/newsdesk.log"));
    }
}
