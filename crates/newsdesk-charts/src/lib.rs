//! Chart configuration generation for newsroom publishing statistics
//!
//! [`ChartConfigBuilder`] takes one or two named count sources, merges them
//! into a category axis, sorts by per-category totals and emits a
//! declarative [`ChartConfig`] that a Highcharts-style front end renders as a
//! bar/column chart or a table. The [`report`] module reduces publishing
//! aggregation buckets into such sources.

pub mod builder;
pub mod formatter;
pub mod output;
pub mod report;
pub mod source;
pub mod table;
pub mod types;

pub use builder::ChartConfigBuilder;
pub use formatter::{ChartFormatter, DefaultFormatter};
pub use output::{
    AxisTitle, Cell, ChartConfig, ChartSection, Legend, PlotOptions, Series,
    SeriesPlotOptions, TitleText, Toggle, Tooltip, XAxisConfig, YAxisConfig, ZoomType,
};
pub use report::{PublishingPerformanceReport, PublishingReport, ReportArgs, StateCounts};
pub use source::{Source, SourceRole, SourceValues};
pub use types::{ChartLabels, ChartType, SortOrder};
