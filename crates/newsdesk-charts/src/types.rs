//! Chart presentation types

use newsdesk_common::NewsdeskError;
use newsdesk_config::ReportSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering type requested by the front end
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    /// Horizontal bars
    Bar,
    /// Vertical columns
    Column,
    /// Tabular rendering with headers and rows
    Table,
    /// Any other Highcharts type, passed through untouched
    Other(String),
}

impl ChartType {
    /// Wire name of the type
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Column => "column",
            ChartType::Table => "table",
            ChartType::Other(name) => name,
        }
    }

    /// Whether this type renders as a table
    pub fn is_table(&self) -> bool {
        matches!(self, ChartType::Table)
    }
}

impl From<String> for ChartType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bar" => ChartType::Bar,
            "column" => ChartType::Column,
            "table" => ChartType::Table,
            _ => ChartType::Other(value),
        }
    }
}

impl From<&str> for ChartType {
    fn from(value: &str) -> Self {
        ChartType::from(value.to_string())
    }
}

impl From<ChartType> for String {
    fn from(value: ChartType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction categories are sorted by their total count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest totals first
    Asc,
    /// Largest totals first
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire name of the order
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = NewsdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(NewsdeskError::validation_field(
                format!("Invalid sort order '{other}', expected 'asc' or 'desc'"),
                "sort_order",
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed labels used in generated configs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    /// Series name of single-source charts and the y-axis title
    pub series: String,
    /// Header of the row total column in multi-source tables
    pub total: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            series: "Published Stories".to_string(),
            total: "Total Stories".to_string(),
        }
    }
}

impl From<&ReportSettings> for ChartLabels {
    fn from(settings: &ReportSettings) -> Self {
        Self {
            series: settings.series_label.clone(),
            total: settings.total_label.clone(),
        }
    }
}
