//! Publishing performance report generation

use super::aggregation::{AggregationResponse, StateFilter, TermBucket};
use super::args::ReportArgs;
use super::dates::date_subtitle;
use crate::builder::ChartConfigBuilder;
use crate::formatter::ChartFormatter;
use crate::output::ChartConfig;
use crate::source::saturating_total;
use crate::types::{ChartLabels, SortOrder};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use newsdesk_common::{Key, NewsdeskError, Result, WorkflowState};
use newsdesk_config::ReportSettings;
use newsdesk_labels::LabelProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const CHART_ID: &str = "content_publishing";
const DEFAULT_SUBGROUP_FIELD: &str = "state";

/// Item counts per workflow state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Killed originals
    pub killed: u64,
    /// Corrections issued as rewrites
    pub corrected: u64,
    /// Rewrites that were published
    pub updated: u64,
    /// Published originals
    pub published: u64,
}

impl StateCounts {
    /// Count for one state
    pub fn get(&self, state: WorkflowState) -> u64 {
        match state {
            WorkflowState::Killed => self.killed,
            WorkflowState::Corrected => self.corrected,
            WorkflowState::Updated => self.updated,
            WorkflowState::Published => self.published,
        }
    }

    /// Add to the count of one state
    pub fn add(&mut self, state: WorkflowState, count: u64) {
        match state {
            WorkflowState::Killed => self.killed = self.killed.saturating_add(count),
            WorkflowState::Corrected => self.corrected = self.corrected.saturating_add(count),
            WorkflowState::Updated => self.updated = self.updated.saturating_add(count),
            WorkflowState::Published => self.published = self.published.saturating_add(count),
        }
    }

    /// Add every count of `other`
    pub fn merge(&mut self, other: &StateCounts) {
        for state in WorkflowState::ALL {
            self.add(state, other.get(state));
        }
    }

    /// Sum over all states
    pub fn total(&self) -> u64 {
        saturating_total(WorkflowState::ALL.iter().map(|state| self.get(*state)))
    }

    /// Counts keyed by raw state, in report order
    pub fn to_source_values(&self) -> IndexMap<Key, u64> {
        WorkflowState::ALL
            .iter()
            .map(|state| (Key::from(state.as_str()), self.get(*state)))
            .collect()
    }
}

/// Report output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishingReport {
    /// Counts per group value
    pub groups: IndexMap<Key, StateCounts>,
    /// Counts summed over all groups
    pub subgroups: StateCounts,
    /// Generated chart configurations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highcharts: Vec<ChartConfig>,
}

/// Titles derived from the group being reported on
struct PublishingFormatter {
    group_field: String,
    single_group: Option<Key>,
}

impl ChartFormatter for PublishingFormatter {
    fn title(&self, chart: &ChartConfigBuilder) -> Option<String> {
        if let Some(title) = chart.title() {
            return Some(title.to_string());
        }

        let series = &chart.labels().series;
        let group_title = chart.get_source_name(&self.group_field);
        let title = match &self.single_group {
            Some(key) => format!(
                "{} for {}: {}",
                series,
                group_title,
                chart.get_source_title(&self.group_field, key)
            ),
            None => format!("{series} per {group_title}"),
        };
        Some(title)
    }
}

/// Publishing performance report service
#[derive(Debug, Clone, Default)]
pub struct PublishingPerformanceReport {
    settings: ReportSettings,
    today: Option<NaiveDate>,
}

impl PublishingPerformanceReport {
    /// Create a report service with configured defaults
    pub fn new(settings: ReportSettings) -> Self {
        Self {
            settings,
            today: None,
        }
    }

    /// Fix the reference day of relative date subtitles
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Reduce aggregation buckets into state counts per group.
    ///
    /// Originals count as published or killed. Rewrites count as corrected,
    /// and a published rewrite counts as updated. Blank group keys are skipped.
    pub fn generate_report(&self, aggregations: &AggregationResponse) -> PublishingReport {
        let mut report = PublishingReport::default();

        for parent in &aggregations.parent {
            let Some(key) = parent.key.as_ref().filter(|key| !key.is_blank()) else {
                debug!("Skipping bucket without a group key");
                continue;
            };

            let mut counts = StateCounts::default();
            for (state, count) in states(parent.no_rewrite_of.as_ref()) {
                match state {
                    WorkflowState::Published | WorkflowState::Killed => counts.add(state, count),
                    _ => {}
                }
            }
            for (state, count) in states(parent.rewrite_of.as_ref()) {
                match state {
                    WorkflowState::Corrected => counts.add(WorkflowState::Corrected, count),
                    WorkflowState::Published => counts.add(WorkflowState::Updated, count),
                    _ => {}
                }
            }

            report.subgroups.merge(&counts);
            report.groups.entry(key.clone()).or_default().merge(&counts);
        }

        debug!(groups = report.groups.len(), total = report.subgroups.total(), "Reduced buckets");
        report
    }

    /// Generate the report and its chart configuration.
    ///
    /// A single group charts the subgroup totals of that group. Several
    /// groups chart one stacked category per group.
    #[instrument(skip_all)]
    pub fn generate_highcharts_config<P>(
        &self,
        aggregations: &AggregationResponse,
        args: &ReportArgs,
        provider: &P,
    ) -> Result<PublishingReport>
    where
        P: LabelProvider + ?Sized,
    {
        let chart_params = &args.params.chart;
        let group_field = args
            .aggs
            .group
            .field
            .clone()
            .filter(|field| !field.is_empty())
            .ok_or_else(|| {
                NewsdeskError::validation_field("A group field is required", "aggs.group.field")
            })?;
        let subgroup_field = args
            .aggs
            .subgroup
            .field
            .clone()
            .filter(|field| !field.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBGROUP_FIELD.to_string());
        let chart_type = chart_params
            .chart_type
            .clone()
            .filter(|chart_type| !chart_type.is_empty())
            .unwrap_or_else(|| self.settings.default_chart_type.clone());
        let sort_order = match chart_params.sort_order {
            Some(order) => order,
            None => self.settings.default_sort_order.parse::<SortOrder>()?,
        };

        let mut report = self.generate_report(aggregations);
        let single_group = match report.groups.len() {
            1 => report.groups.keys().next().cloned(),
            _ => None,
        };

        let mut chart =
            ChartConfigBuilder::new(CHART_ID, chart_type).with_labels(ChartLabels::from(&self.settings));
        if single_group.is_some() {
            chart.add_source(&subgroup_field, report.subgroups.to_source_values())?;
            chart.load_translations(provider, Some(group_field.as_str()))?;
        } else {
            let groups: IndexMap<Key, IndexMap<Key, u64>> = report
                .groups
                .iter()
                .map(|(key, counts)| (key.clone(), counts.to_source_values()))
                .collect();
            chart.add_source(&group_field, groups)?;
            chart.add_source(&subgroup_field, report.subgroups.to_source_values())?;
            chart.load_translations(provider, None)?;
        }

        let subtitle = match &chart_params.subtitle {
            Some(subtitle) => Some(subtitle.clone()),
            None => date_subtitle(&args.params.dates, self.today())?,
        };
        chart.set_title(chart_params.title.clone());
        chart.set_subtitle(subtitle);
        chart.set_sort_order(Some(sort_order));
        chart.set_formatter(Arc::new(PublishingFormatter {
            group_field,
            single_group,
        }));

        report.highcharts = vec![chart.gen_config()?];
        info!(
            groups = report.groups.len(),
            chart_type = %chart.chart_type(),
            "Generated publishing performance report"
        );
        Ok(report)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn states(filter: Option<&StateFilter>) -> impl Iterator<Item = (WorkflowState, u64)> + '_ {
    filter
        .map(StateFilter::buckets)
        .unwrap_or_default()
        .iter()
        .filter_map(bucket_state)
}

fn bucket_state(bucket: &TermBucket) -> Option<(WorkflowState, u64)> {
    let state = bucket.key.as_ref()?.as_text().and_then(WorkflowState::from_key)?;
    Some((state, bucket.doc_count.unwrap_or(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TitleText;
    use crate::report::args::{AggField, DateFilter, DateParams};
    use newsdesk_common::test_utils::{aggregation_fixtures, vocabulary_fixtures};
    use newsdesk_labels::{InMemoryStore, LabelRegistry};

    fn aggregations() -> AggregationResponse {
        serde_json::from_str(aggregation_fixtures::desk_state_aggregations_json()).unwrap()
    }

    fn registry() -> LabelRegistry {
        let store =
            InMemoryStore::from_yaml_str(vocabulary_fixtures::newsroom_vocabularies_yaml()).unwrap();
        LabelRegistry::new(Arc::new(store))
    }

    fn service() -> PublishingPerformanceReport {
        PublishingPerformanceReport::default()
            .with_today(NaiveDate::from_ymd_opt(2018, 7, 4).unwrap())
    }

    fn desk_args() -> ReportArgs {
        let mut args = ReportArgs::default();
        args.aggs.group = AggField::new("task.desk");
        args
    }

    #[test]
    fn test_generate_report() {
        let report = service().generate_report(&aggregations());

        assert_eq!(report.groups.len(), 2);
        assert_eq!(
            report.groups[&Key::from("desk1")],
            StateCounts {
                killed: 1,
                corrected: 1,
                updated: 3,
                published: 4
            }
        );
        // Originals never count as corrected
        assert_eq!(
            report.groups[&Key::from("desk2")],
            StateCounts {
                killed: 0,
                corrected: 0,
                updated: 2,
                published: 3
            }
        );
        assert_eq!(
            report.subgroups,
            StateCounts {
                killed: 1,
                corrected: 1,
                updated: 5,
                published: 7
            }
        );
    }

    #[test]
    fn test_empty_aggregations() {
        let report = service().generate_report(&AggregationResponse::default());
        assert!(report.groups.is_empty());
        assert_eq!(report.subgroups.total(), 0);
    }

    #[test]
    fn test_state_counts_saturate() {
        let mut counts = StateCounts {
            published: u64::MAX - 1,
            killed: 2,
            ..StateCounts::default()
        };
        counts.add(WorkflowState::Published, 5);
        assert_eq!(counts.published, u64::MAX);
        assert_eq!(counts.total(), u64::MAX);

        let mut merged = StateCounts::default();
        merged.merge(&counts);
        merged.merge(&counts);
        assert_eq!(merged.killed, 4);
        assert_eq!(merged.published, u64::MAX);
    }

    #[test]
    fn test_many_groups_stack_by_state() {
        let report = service()
            .generate_highcharts_config(&aggregations(), &desk_args(), &registry())
            .unwrap();
        let config = &report.highcharts[0];

        assert_eq!(config.id, "content_publishing");
        assert_eq!(config.title, TitleText::Text { text: Some("Published Stories per Desk".to_string()) });
        assert_eq!(config.subtitle, TitleText::Text { text: None });
        assert_eq!(
            config.x_axis.categories,
            vec![Key::from("Politic Desk"), Key::from("Sports Desk")]
        );

        let series: Vec<(&str, Vec<u64>)> = config
            .series
            .iter()
            .map(|s| (s.name.as_str(), s.data.clone()))
            .collect();
        assert_eq!(
            series,
            vec![
                ("Killed", vec![1, 0]),
                ("Corrected", vec![1, 0]),
                ("Updated", vec![3, 2]),
                ("Published", vec![4, 3]),
            ]
        );
        let legend = config.legend.clone().unwrap();
        assert_eq!(legend.title.unwrap().text, "State");
    }

    #[test]
    fn test_single_group_charts_its_states() {
        let mut aggregations = aggregations();
        aggregations.parent.truncate(1);

        let report = service()
            .generate_highcharts_config(&aggregations, &desk_args(), &registry())
            .unwrap();
        let config = &report.highcharts[0];

        assert_eq!(
            config.title.text(),
            Some("Published Stories for Desk: Politic Desk")
        );
        assert_eq!(config.x_axis.title.text, "State");
        assert_eq!(
            config.x_axis.categories,
            vec![
                Key::from("Published"),
                Key::from("Updated"),
                Key::from("Killed"),
                Key::from("Corrected")
            ]
        );
        assert_eq!(config.series[0].data, vec![4, 3, 1, 1]);
        assert_eq!(config.series[0].name, "Published Stories");
    }

    #[test]
    fn test_request_overrides() {
        let mut args = desk_args();
        args.params.chart.chart_type = Some("table".to_string());
        args.params.chart.title = Some("Desk output".to_string());
        args.params.chart.sort_order = Some(SortOrder::Asc);
        args.params.dates = DateParams {
            filter: Some(DateFilter::Yesterday),
            ..Default::default()
        };

        let report = service()
            .generate_highcharts_config(&aggregations(), &args, &registry())
            .unwrap();
        let config = &report.highcharts[0];

        assert_eq!(config.title, TitleText::Plain(Some("Desk output".to_string())));
        assert_eq!(config.subtitle, TitleText::Plain(Some("Tuesday 3 July 2018".to_string())));
        assert_eq!(
            config.headers.as_deref(),
            Some(
                &[
                    "Desk".to_string(),
                    "Killed".to_string(),
                    "Corrected".to_string(),
                    "Updated".to_string(),
                    "Published".to_string(),
                    "Total Stories".to_string()
                ][..]
            )
        );
        assert_eq!(config.x_axis.categories[0], Key::from("Sports Desk"));
    }

    #[test]
    fn test_missing_group_field() {
        let err = service()
            .generate_highcharts_config(&aggregations(), &ReportArgs::default(), &registry())
            .unwrap_err();
        assert!(matches!(
            err,
            NewsdeskError::Validation { field: Some(ref field), .. } if field == "aggs.group.field"
        ));
    }

    #[test]
    fn test_serialized_report() {
        let report = service()
            .generate_highcharts_config(&aggregations(), &desk_args(), &registry())
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["groups"]["desk1"]["updated"], 3);
        assert_eq!(value["subgroups"]["published"], 7);
        assert_eq!(value["highcharts"][0]["type"], "bar");
        assert_eq!(value["highcharts"][0]["chart"]["zoomType"], "y");
    }
}
