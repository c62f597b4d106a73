//! Command line front end for the publishing performance report
//!
//! Reads an aggregation response and an optional report request from disk,
//! resolves labels from a vocabulary store document and prints the report
//! with its chart configuration as JSON.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use newsdesk_charts::report::{AggregationResponse, ReportArgs};
use newsdesk_charts::PublishingPerformanceReport;
use newsdesk_config::{Config, ConfigLoader};
use newsdesk_labels::{InMemoryStore, LabelRegistry};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Aggregation response JSON file
    #[arg(short, long)]
    pub aggregations: PathBuf,

    /// Report request JSON file (`params` and `aggs`)
    #[arg(long)]
    pub args: Option<PathBuf>,

    /// Vocabulary store document, overrides `labels.vocabulary_file`
    #[arg(long)]
    pub vocabularies: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Reference day for relative date subtitles (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Load the configuration named on the command line, or the default lookup
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    Ok(config)
}

/// Generate the report and render it as JSON
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let aggregations: AggregationResponse = read_json(&cli.aggregations)?;
    let args: ReportArgs = match &cli.args {
        Some(path) => read_json(path)?,
        None => ReportArgs::default(),
    };

    let vocabularies = cli
        .vocabularies
        .clone()
        .or_else(|| config.labels.vocabulary_file.as_ref().map(PathBuf::from));
    let store = match vocabularies {
        Some(path) => InMemoryStore::from_file(&path)
            .with_context(|| format!("Failed to load vocabularies from {}", path.display()))?,
        None => {
            warn!("No vocabulary file configured, labels fall back to raw keys");
            InMemoryStore::new()
        }
    };
    let registry = LabelRegistry::from_settings(Arc::new(store), &config.labels);

    let mut service = PublishingPerformanceReport::new(config.report.clone());
    if let Some(today) = cli.today {
        service = service.with_today(today);
    }

    let report = service
        .generate_highcharts_config(&aggregations, &args, &registry)
        .context("Failed to generate report")?;
    info!(groups = report.groups.len(), "Report generated");

    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    Ok(output)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "Reading JSON input");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
