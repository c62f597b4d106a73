//! Chart configuration builder

use crate::formatter::{ChartFormatter, DefaultFormatter};
use crate::output::{
    AxisTitle, ChartConfig, ChartSection, Legend, PlotOptions, Series, SeriesPlotOptions,
    TitleText, Toggle, Tooltip, XAxisConfig, YAxisConfig, ZoomType,
};
use crate::source::{Source, SourceRole, SourceValues};
use crate::table;
use crate::types::{ChartLabels, ChartType, SortOrder};
use indexmap::IndexMap;
use newsdesk_common::{humanize_field, Key, NewsdeskError, Result};
use newsdesk_labels::{LabelProvider, Translation};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

const SINGLE_HEADER_FORMAT: &str = "{point.x}: {point.y}";
const STACKED_HEADER_FORMAT: &str = "{series.name}/{point.x}: {point.y}";
const STACKING_NORMAL: &str = "normal";

/// Builds a chart or table configuration from one or two named sources.
///
/// The first source added is the primary dimension: its keys become the axis
/// categories. A second source is the breakdown dimension and turns the chart
/// into a stacked chart with one series per breakdown key.
///
/// ```
/// use newsdesk_charts::{ChartConfigBuilder, SourceValues};
///
/// let mut chart = ChartConfigBuilder::new("cid", "bar").with_title("Charts");
/// chart
///     .add_source("anpa_category.qcode", SourceValues::flat([("a", 3), ("b", 4), ("c", 1)]))
///     .unwrap();
///
/// let config = chart.gen_config().unwrap();
/// assert_eq!(config.series[0].data, vec![4, 3, 1]);
/// ```
#[derive(Clone)]
pub struct ChartConfigBuilder {
    id: String,
    chart_type: ChartType,
    title: Option<String>,
    subtitle: Option<String>,
    sort_order: Option<SortOrder>,
    labels: ChartLabels,
    sources: Vec<Source>,
    translations: IndexMap<String, Translation>,
    formatter: Arc<dyn ChartFormatter>,
}

impl fmt::Debug for ChartConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfigBuilder")
            .field("id", &self.id)
            .field("chart_type", &self.chart_type)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("sort_order", &self.sort_order)
            .field("sources", &self.sources)
            .field("translations", &self.translations.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ChartConfigBuilder {
    /// Create a builder for a chart id and type
    pub fn new(id: impl Into<String>, chart_type: impl Into<ChartType>) -> Self {
        Self {
            id: id.into(),
            chart_type: chart_type.into(),
            title: None,
            subtitle: None,
            sort_order: None,
            labels: ChartLabels::default(),
            sources: Vec::new(),
            translations: IndexMap::new(),
            formatter: Arc::new(DefaultFormatter),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set the fixed series and total labels
    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Replace the title and label hooks
    pub fn with_formatter(mut self, formatter: impl ChartFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Set or clear the title
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Set or clear the subtitle
    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
    }

    /// Set or clear the sort order
    pub fn set_sort_order(&mut self, sort_order: Option<SortOrder>) {
        self.sort_order = sort_order;
    }

    /// Replace the title and label hooks with a shared formatter
    pub fn set_formatter(&mut self, formatter: Arc<dyn ChartFormatter>) {
        self.formatter = formatter;
    }

    /// Install a translation for a field without asking a provider
    pub fn set_translation(&mut self, field: impl Into<String>, translation: Translation) {
        self.translations.insert(field.into(), translation);
    }

    /// Chart id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Chart type
    pub fn chart_type(&self) -> &ChartType {
        &self.chart_type
    }

    /// Configured title, before formatter hooks
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Configured subtitle, before formatter hooks
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Configured sort order; `None` sorts descending
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// Fixed series and total labels
    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    /// Attached sources in insertion order
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Loaded translations keyed by field
    pub fn translations(&self) -> &IndexMap<String, Translation> {
        &self.translations
    }

    /// The source whose keys form the categories
    pub fn primary(&self) -> Option<&Source> {
        self.sources.iter().find(|s| s.role == SourceRole::Primary)
    }

    /// The source whose keys form the stacked series
    pub fn breakdown(&self) -> Option<&Source> {
        self.sources.iter().find(|s| s.role == SourceRole::Breakdown)
    }

    /// Attach a source, or replace the values of a source with the same name.
    ///
    /// Stacked charts need a nested primary and a flat breakdown; other
    /// combinations and a third source are rejected. Empty mappings fit
    /// either shape.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        values: impl Into<SourceValues>,
    ) -> Result<()> {
        let name = name.into();
        let values = values.into();

        if let Some(index) = self.sources.iter().position(|s| s.name == name) {
            let role = self.sources[index].role;
            self.check_shape(role, &name, &values, Some(index))?;
            debug!(source = %name, "Replacing source values");
            self.sources[index].values = values;
            return Ok(());
        }

        let role = match self.sources.len() {
            0 => SourceRole::Primary,
            1 => SourceRole::Breakdown,
            _ => {
                return Err(NewsdeskError::config(format!(
                    "Chart '{}' supports at most two sources, cannot add '{}'",
                    self.id, name
                )))
            }
        };
        self.check_shape(role, &name, &values, None)?;
        debug!(source = %name, ?role, categories = values.len(), "Adding source");
        self.sources.push(Source { name, role, values });
        Ok(())
    }

    fn check_shape(
        &self,
        role: SourceRole,
        name: &str,
        values: &SourceValues,
        replacing: Option<usize>,
    ) -> Result<()> {
        let nested = values.is_nested() && !values.is_empty();
        let flat = !values.is_nested() && !values.is_empty();

        match role {
            SourceRole::Primary => {
                if flat && self.breakdown().is_some() {
                    return Err(NewsdeskError::config(format!(
                        "Primary source '{name}' must be nested when a breakdown source is present"
                    )));
                }
            }
            SourceRole::Breakdown => {
                if nested {
                    return Err(NewsdeskError::config(format!(
                        "Breakdown source '{name}' must be a flat mapping"
                    )));
                }
                let primary = self
                    .sources
                    .iter()
                    .enumerate()
                    .find(|(index, s)| s.role == SourceRole::Primary && Some(*index) != replacing)
                    .map(|(_, s)| s);
                if let Some(primary) = primary {
                    if !primary.values.is_nested() && !primary.values.is_empty() {
                        return Err(NewsdeskError::config(format!(
                            "Cannot add breakdown source '{}': primary source '{}' is flat",
                            name, primary.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Load the translation of every source, plus `primary_field` if given.
    ///
    /// Each distinct field is requested once per call and replaces any
    /// translation loaded earlier. Provider failures are returned, not masked.
    #[instrument(skip(self, provider), fields(chart = %self.id))]
    pub fn load_translations<P>(&mut self, provider: &P, primary_field: Option<&str>) -> Result<()>
    where
        P: LabelProvider + ?Sized,
    {
        let mut fields: Vec<String> = self.sources.iter().map(|s| s.name.clone()).collect();
        if let Some(field) = primary_field {
            if !fields.iter().any(|known| known == field) {
                fields.push(field.to_string());
            }
        }

        for field in fields {
            let translation = provider.translation(&field).map_err(|err| {
                NewsdeskError::translation_with_source(
                    format!("Failed to load labels for '{field}'"),
                    Some(field.clone()),
                    err,
                )
            })?;
            debug!(field = %field, title = %translation.title, "Loaded translation");
            self.translations.insert(field, translation);
        }
        Ok(())
    }

    /// Whether a breakdown source is attached
    pub fn is_multi_source(&self) -> bool {
        self.sources.len() > 1
    }

    /// Title after formatter hooks
    pub fn get_title(&self) -> Option<String> {
        self.formatter.title(self)
    }

    /// Subtitle after formatter hooks
    pub fn get_subtitle(&self) -> Option<String> {
        self.formatter.subtitle(self)
    }

    /// Display title of a source field after formatter hooks
    pub fn get_source_name(&self, field: &str) -> String {
        self.formatter.source_name(self, field)
    }

    /// Display labels for raw keys after formatter hooks
    pub fn get_source_titles(&self, field: &str, keys: &[Key]) -> Vec<Key> {
        self.formatter.source_titles(self, field, keys)
    }

    /// Display label for one raw key after formatter hooks
    pub fn get_source_title(&self, field: &str, key: &Key) -> Key {
        self.get_source_titles(field, std::slice::from_ref(key))
            .into_iter()
            .next()
            .unwrap_or_else(|| key.clone())
    }

    /// Translation title, or the humanized field path
    pub fn default_source_name(&self, field: &str) -> String {
        self.translations
            .get(field)
            .map(|translation| translation.title.clone())
            .unwrap_or_else(|| humanize_field(field))
    }

    /// Translated labels, falling back to the raw key
    pub fn default_source_titles(&self, field: &str, keys: &[Key]) -> Vec<Key> {
        let translation = self.translations.get(field);
        keys.iter()
            .map(|key| {
                translation
                    .and_then(|t| t.label_for(key))
                    .cloned()
                    .unwrap_or_else(|| key.clone())
            })
            .collect()
    }

    /// Category axis with sorted, translated categories
    pub fn get_x_axis_config(&self) -> XAxisConfig {
        let keys: Vec<Key> = self.sorted_weights().into_iter().map(|(key, _)| key).collect();
        self.x_axis_for(&keys)
    }

    /// Generate the configuration for the current sources.
    ///
    /// Does not modify the builder and never queries a label provider.
    #[instrument(skip(self), fields(chart = %self.id, chart_type = %self.chart_type))]
    pub fn gen_config(&self) -> Result<ChartConfig> {
        if self.sources.is_empty() {
            return Err(NewsdeskError::config(format!(
                "Chart '{}' has no sources",
                self.id
            )));
        }

        let weights = self.sorted_weights();
        let keys: Vec<Key> = weights.iter().map(|(key, _)| key.clone()).collect();
        let x_axis = self.x_axis_for(&keys);
        let series = self.build_series(&weights);
        debug!(
            categories = keys.len(),
            series = series.len(),
            stacked = self.is_multi_source(),
            "Generated chart data"
        );

        let config = if self.chart_type.is_table() {
            self.table_config(x_axis, series)
        } else {
            self.chart_config(x_axis, series)
        };
        Ok(config)
    }

    fn sorted_weights(&self) -> Vec<(Key, u64)> {
        let Some(primary) = self.primary() else {
            return Vec::new();
        };
        let mut weights = primary.values.weights();
        // Stable sorts keep insertion order among equal totals
        match self.sort_order.unwrap_or_default() {
            SortOrder::Asc => weights.sort_by(|a, b| a.1.cmp(&b.1)),
            SortOrder::Desc => weights.sort_by(|a, b| b.1.cmp(&a.1)),
        }
        weights
    }

    fn x_axis_for(&self, keys: &[Key]) -> XAxisConfig {
        match self.primary() {
            Some(primary) => XAxisConfig {
                title: AxisTitle::new(self.get_source_name(&primary.name)),
                categories: self.get_source_titles(&primary.name, keys),
            },
            None => XAxisConfig {
                title: AxisTitle::new(String::new()),
                categories: Vec::new(),
            },
        }
    }

    fn build_series(&self, weights: &[(Key, u64)]) -> Vec<Series> {
        let (Some(primary), Some(breakdown)) = (self.primary(), self.breakdown()) else {
            return vec![Series {
                name: self.labels.series.clone(),
                data: weights.iter().map(|(_, weight)| *weight).collect(),
            }];
        };

        let mut sub_keys: Vec<Key> = breakdown.values.keys().into_iter().cloned().collect();
        for key in primary.values.sub_keys() {
            if !sub_keys.iter().any(|known| known.loosely_eq(&key)) {
                sub_keys.push(key);
            }
        }

        let names = self.get_source_titles(&breakdown.name, &sub_keys);
        sub_keys
            .iter()
            .enumerate()
            .map(|(index, sub)| Series {
                name: names.get(index).unwrap_or(sub).to_string(),
                data: weights
                    .iter()
                    .map(|(category, _)| primary.values.count(category, sub))
                    .collect(),
            })
            .collect()
    }

    fn chart_config(&self, x_axis: XAxisConfig, series: Vec<Series>) -> ChartConfig {
        let stacked = self.is_multi_source();

        let legend = match self.breakdown() {
            Some(breakdown) => Legend {
                enabled: true,
                title: Some(AxisTitle::new(self.get_source_name(&breakdown.name))),
            },
            None => Legend {
                enabled: false,
                title: None,
            },
        };

        let (header_format, plot_options) = if stacked {
            (
                STACKED_HEADER_FORMAT,
                SeriesPlotOptions {
                    stacking: Some(STACKING_NORMAL.to_string()),
                    color_by_point: false,
                    data_labels: None,
                },
            )
        } else {
            (
                SINGLE_HEADER_FORMAT,
                SeriesPlotOptions {
                    stacking: None,
                    color_by_point: true,
                    data_labels: Some(Toggle::ON),
                },
            )
        };

        ChartConfig {
            id: self.id.clone(),
            chart_type: self.chart_type.clone(),
            chart: ChartSection {
                chart_type: self.chart_type.clone(),
                zoom_type: Some(ZoomType::for_chart(&self.chart_type)),
            },
            title: TitleText::Text {
                text: self.get_title(),
            },
            subtitle: TitleText::Text {
                text: self.get_subtitle(),
            },
            x_axis,
            y_axis: Some(YAxisConfig {
                title: AxisTitle::new(self.labels.series.clone()),
                stack_labels: Toggle { enabled: stacked },
                allow_decimals: false,
            }),
            legend: Some(legend),
            tooltip: Some(Tooltip {
                header_format: header_format.to_string(),
                point_format: String::new(),
            }),
            plot_options: Some(PlotOptions::uniform(plot_options)),
            series,
            headers: None,
            rows: None,
            credits: Toggle::OFF,
        }
    }

    fn table_config(&self, x_axis: XAxisConfig, series: Vec<Series>) -> ChartConfig {
        let stacked = self.is_multi_source();
        let total = stacked.then_some(self.labels.total.as_str());
        let headers = table::headers(&x_axis, &series, total);
        let rows = table::rows(&x_axis, &series, stacked);

        ChartConfig {
            id: self.id.clone(),
            chart_type: self.chart_type.clone(),
            chart: ChartSection {
                chart_type: ChartType::Column,
                zoom_type: None,
            },
            title: TitleText::Plain(self.get_title()),
            subtitle: TitleText::Plain(self.get_subtitle()),
            x_axis,
            y_axis: None,
            legend: None,
            tooltip: None,
            plot_options: None,
            series,
            headers: Some(headers),
            rows: Some(rows),
            credits: Toggle::OFF,
        }
    }
}
