//! Late-bound label hooks used while generating a config

use crate::builder::ChartConfigBuilder;
use newsdesk_common::Key;

/// Strategy for the titles and labels of a chart.
///
/// Every method has a default that reads the builder's configured values and
/// loaded translations. Reports override individual hooks, for example to
/// derive a title from the request parameters, and inject the strategy with
/// [`ChartConfigBuilder::with_formatter`].
pub trait ChartFormatter: Send + Sync {
    /// Chart title
    fn title(&self, chart: &ChartConfigBuilder) -> Option<String> {
        chart.title().map(str::to_string)
    }

    /// Chart subtitle
    fn subtitle(&self, chart: &ChartConfigBuilder) -> Option<String> {
        chart.subtitle().map(str::to_string)
    }

    /// Display title of a source field
    fn source_name(&self, chart: &ChartConfigBuilder, field: &str) -> String {
        chart.default_source_name(field)
    }

    /// Display labels for raw keys of a source field, in the same order
    fn source_titles(&self, chart: &ChartConfigBuilder, field: &str, keys: &[Key]) -> Vec<Key> {
        chart.default_source_titles(field, keys)
    }
}

/// Formatter that uses the builder's values unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl ChartFormatter for DefaultFormatter {}
