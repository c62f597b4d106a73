//! Report request parameters

use crate::types::SortOrder;
use serde::{Deserialize, Serialize};

/// Report request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportArgs {
    /// Presentation parameters
    pub params: ReportParams,
    /// Aggregation fields
    pub aggs: ReportAggs,
}

/// Presentation parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    /// Chart options
    pub chart: ChartParams,
    /// Date filter used for the default subtitle
    pub dates: DateParams,
}

/// Chart options of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartParams {
    /// Chart type, e.g. `bar` or `table`
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    /// Explicit title
    pub title: Option<String>,
    /// Explicit subtitle
    pub subtitle: Option<String>,
    /// Category sort order
    pub sort_order: Option<SortOrder>,
}

/// Date filter of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateParams {
    /// Kind of date filter
    pub filter: Option<DateFilter>,
    /// Range start, `YYYY-MM-DD`
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD`
    pub end: Option<String>,
}

/// Supported date filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    /// Explicit start and end dates
    Range,
    /// The day before the reference day
    Yesterday,
    /// Sunday to Saturday of the previous week
    LastWeek,
    /// The previous calendar month
    LastMonth,
    /// Filters without a derived subtitle
    #[serde(other)]
    Other,
}

/// Aggregation fields of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportAggs {
    /// Field items are grouped by
    pub group: AggField,
    /// Field groups are split by; defaults to `state`
    pub subgroup: AggField,
}

/// One aggregation field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggField {
    /// Field path
    pub field: Option<String>,
}

impl AggField {
    /// Field set to `field`
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let args: ReportArgs = serde_json::from_value(json!({
            "params": {
                "chart": {"type": "table", "sort_order": "asc"},
                "dates": {"filter": "last_week"}
            },
            "aggs": {"group": {"field": "task.desk"}}
        }))
        .unwrap();

        assert_eq!(args.params.chart.chart_type.as_deref(), Some("table"));
        assert_eq!(args.params.chart.sort_order, Some(SortOrder::Asc));
        assert_eq!(args.params.dates.filter, Some(DateFilter::LastWeek));
        assert_eq!(args.aggs.group, AggField::new("task.desk"));
        assert_eq!(args.aggs.subgroup.field, None);
    }

    #[test]
    fn test_unknown_date_filter() {
        let dates: DateParams = serde_json::from_value(json!({"filter": "relative_days"})).unwrap();
        assert_eq!(dates.filter, Some(DateFilter::Other));
    }
}
