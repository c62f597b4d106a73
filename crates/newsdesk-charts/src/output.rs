//! Serializable chart configuration consumed by the dashboard front end
//!
//! Field names follow the Highcharts option names the front end binds to.

use crate::types::ChartType;
use newsdesk_common::{Key, Result};
use serde::{Deserialize, Serialize};

/// A generated chart or table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Chart id
    pub id: String,
    /// Requested chart type
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// Highcharts `chart` options
    pub chart: ChartSection,
    /// Title, `{text}` for charts and a plain string for tables
    pub title: TitleText,
    /// Subtitle, same shape as the title
    pub subtitle: TitleText,
    /// Category axis
    pub x_axis: XAxisConfig,
    /// Count axis; charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxisConfig>,
    /// Legend; charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Tooltip formats; charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    /// Per-type plot options; charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    /// Data series aligned with the axis categories
    pub series: Vec<Series>,
    /// Table header; tables only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    /// Table body; tables only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<Cell>>>,
    /// Highcharts credits
    pub credits: Toggle,
}

impl ChartConfig {
    /// Convert into a plain JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Highcharts `chart` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    /// Rendered series type
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// Zoom axis; absent for tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_type: Option<ZoomType>,
}

/// Axis along which the user can zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomType {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl ZoomType {
    /// Bars zoom along the vertical axis, everything else horizontally
    pub fn for_chart(chart_type: &ChartType) -> Self {
        match chart_type {
            ChartType::Bar => ZoomType::Y,
            _ => ZoomType::X,
        }
    }
}

/// Chart title in either of its two wire shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleText {
    /// `{"text": ...}`
    Text {
        /// Title text
        text: Option<String>,
    },
    /// Bare string or null
    Plain(Option<String>),
}

impl TitleText {
    /// The title text, whichever the shape
    pub fn text(&self) -> Option<&str> {
        match self {
            TitleText::Text { text } | TitleText::Plain(text) => text.as_deref(),
        }
    }
}

/// `{"text": ...}` axis or legend title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitle {
    /// Title text
    pub text: String,
}

impl AxisTitle {
    /// Create a title
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Category axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XAxisConfig {
    /// Axis title
    pub title: AxisTitle,
    /// Display labels in sorted order
    pub categories: Vec<Key>,
}

/// Count axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisConfig {
    /// Axis title
    pub title: AxisTitle,
    /// Totals above stacked columns
    pub stack_labels: Toggle,
    /// Counts are whole numbers
    pub allow_decimals: bool,
}

/// `{"enabled": ...}` switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    /// Whether the feature is on
    pub enabled: bool,
}

impl Toggle {
    /// Enabled switch
    pub const ON: Toggle = Toggle { enabled: true };
    /// Disabled switch
    pub const OFF: Toggle = Toggle { enabled: false };
}

/// Chart legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    /// Whether the legend is shown
    pub enabled: bool,
    /// Legend heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
}

/// Tooltip templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Header template
    pub header_format: String,
    /// Per-point template
    pub point_format: String,
}

/// Plot options applied to both bar and column rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Bar options
    pub bar: SeriesPlotOptions,
    /// Column options
    pub column: SeriesPlotOptions,
}

impl PlotOptions {
    /// Same options for bars and columns
    pub fn uniform(options: SeriesPlotOptions) -> Self {
        Self {
            bar: options.clone(),
            column: options,
        }
    }
}

/// Options for one series type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPlotOptions {
    /// Stacking mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacking: Option<String>,
    /// One color per category
    pub color_by_point: bool,
    /// Value labels on each point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<Toggle>,
}

/// One data series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Series name shown in legend and tooltip
    pub name: String,
    /// Count per category, aligned with the axis categories
    pub data: Vec<u64>,
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A count
    Count(u64),
    /// A category label
    Label(Key),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_shapes() {
        let chart = TitleText::Text { text: None };
        assert_eq!(serde_json::to_value(&chart).unwrap(), json!({"text": null}));

        let table = TitleText::Plain(Some("Tables".to_string()));
        assert_eq!(serde_json::to_value(&table).unwrap(), json!("Tables"));
        assert_eq!(table.text(), Some("Tables"));

        let parsed: TitleText = serde_json::from_value(json!({"text": "Charts"})).unwrap();
        assert_eq!(parsed.text(), Some("Charts"));
    }

    #[test]
    fn test_zoom_mapping() {
        assert_eq!(ZoomType::for_chart(&ChartType::Bar), ZoomType::Y);
        assert_eq!(ZoomType::for_chart(&ChartType::Column), ZoomType::X);
        assert_eq!(ZoomType::for_chart(&ChartType::from("line")), ZoomType::X);
    }

    #[test]
    fn test_plot_option_names() {
        let options = SeriesPlotOptions {
            stacking: Some("normal".to_string()),
            color_by_point: false,
            data_labels: None,
        };
        assert_eq!(
            serde_json::to_value(PlotOptions::uniform(options)).unwrap(),
            json!({
                "bar": {"stacking": "normal", "colorByPoint": false},
                "column": {"stacking": "normal", "colorByPoint": false}
            })
        );
    }

    #[test]
    fn test_cells_keep_json_types() {
        let row = vec![Cell::Label(Key::from("Cricket")), Cell::Count(4), Cell::Label(Key::Int(5))];
        assert_eq!(serde_json::to_value(row).unwrap(), json!(["Cricket", 4, 5]));
    }
}
