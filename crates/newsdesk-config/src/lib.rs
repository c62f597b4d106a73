//! Configuration management for newsdesk analytics

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LabelSettings, LoggingSettings, ReportSettings};
