//! Publishing performance report
//!
//! Reduces the per-group workflow state buckets of a content aggregation into
//! state counts and feeds them to a [`ChartConfigBuilder`](crate::ChartConfigBuilder).

pub mod aggregation;
pub mod args;
pub mod dates;
pub mod publishing;

pub use aggregation::{AggregationResponse, ParentBucket, StateFilter, TermBucket, TermsAggregation};
pub use args::{AggField, ChartParams, DateFilter, DateParams, ReportAggs, ReportArgs, ReportParams};
pub use publishing::{PublishingPerformanceReport, PublishingReport, StateCounts};
