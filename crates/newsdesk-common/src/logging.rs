//! Structured logging infrastructure for newsdesk

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "newsdesk_charts=trace")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output; stderr otherwise
    pub file_path: Option<String>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

fn open_log_file(path: &str) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs never go to stdout, which is reserved for report output.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_new(&config.level).or_else(|_| EnvFilter::try_new("info"))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(span_events)
                .with_target(config.include_targets);

            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry.with(layer.with_writer(Mutex::new(file))).try_init()?;
            } else {
                registry.with(layer.with_writer(io::stderr)).try_init()?;
            }
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_span_events(span_events)
                .with_target(config.include_targets);

            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry
                    .with(layer.with_ansi(false).with_writer(Mutex::new(file)))
                    .try_init()?;
            } else {
                registry.with(layer.with_writer(io::stderr)).try_init()?;
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_span_events(span_events)
                .with_target(config.include_targets);

            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry
                    .with(layer.with_ansi(false).with_writer(Mutex::new(file)))
                    .try_init()?;
            } else {
                registry.with(layer.with_writer(io::stderr)).try_init()?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_log_format_names() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(serde_json::to_string(&LogFormat::Compact).unwrap(), "\"compact\"");
    }
}
