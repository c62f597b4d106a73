//! Subtitles describing the reported date range

use super::args::{DateFilter, DateParams};
use chrono::{Datelike, Duration, NaiveDate};
use newsdesk_common::{NewsdeskError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const RANGE_FORMAT: &str = "%B %-d, %Y";
const DAY_FORMAT: &str = "%A %-d %B %Y";
const MONTH_FORMAT: &str = "%B %Y";

/// Subtitle for a date filter, relative to `today` where the filter needs it
pub fn date_subtitle(dates: &DateParams, today: NaiveDate) -> Result<Option<String>> {
    let subtitle = match dates.filter {
        Some(DateFilter::Range) => {
            let start = parse_date(dates.start.as_deref(), "params.dates.start")?;
            let end = parse_date(dates.end.as_deref(), "params.dates.end")?;
            Some(format_range(start, end))
        }
        Some(DateFilter::Yesterday) => {
            Some((today - Duration::days(1)).format(DAY_FORMAT).to_string())
        }
        Some(DateFilter::LastWeek) => {
            let week = today - Duration::weeks(1);
            // Weeks run Sunday to Saturday
            let start =
                week - Duration::days(i64::from(week.weekday().num_days_from_monday()) + 1);
            Some(format_range(start, start + Duration::days(6)))
        }
        Some(DateFilter::LastMonth) => {
            let first = today - Duration::days(i64::from(today.day0()));
            Some((first - Duration::days(1)).format(MONTH_FORMAT).to_string())
        }
        Some(DateFilter::Other) | None => None,
    };
    Ok(subtitle)
}

fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format(RANGE_FORMAT), end.format(RANGE_FORMAT))
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate> {
    let value = value.ok_or_else(|| {
        NewsdeskError::validation_field("A date range needs a start and an end date", field)
    })?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        NewsdeskError::validation_field(format!("Invalid date '{value}': {e}"), field)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filter(filter: DateFilter) -> DateParams {
        DateParams {
            filter: Some(filter),
            ..Default::default()
        }
    }

    #[test]
    fn test_range() {
        let dates = DateParams {
            filter: Some(DateFilter::Range),
            start: Some("2018-06-01".to_string()),
            end: Some("2018-06-30".to_string()),
        };
        assert_eq!(
            date_subtitle(&dates, date(2018, 7, 4)).unwrap().as_deref(),
            Some("June 1, 2018 - June 30, 2018")
        );
    }

    #[test]
    fn test_invalid_range() {
        let dates = DateParams {
            filter: Some(DateFilter::Range),
            start: Some("01/06/2018".to_string()),
            end: Some("2018-06-30".to_string()),
        };
        let err = date_subtitle(&dates, date(2018, 7, 4)).unwrap_err();
        assert!(matches!(
            err,
            NewsdeskError::Validation { field: Some(ref field), .. } if field == "params.dates.start"
        ));

        let missing = filter(DateFilter::Range);
        assert!(date_subtitle(&missing, date(2018, 7, 4)).is_err());
    }

    #[test]
    fn test_yesterday() {
        assert_eq!(
            date_subtitle(&filter(DateFilter::Yesterday), date(2018, 7, 4))
                .unwrap()
                .as_deref(),
            Some("Tuesday 3 July 2018")
        );
    }

    #[test]
    fn test_last_week_runs_sunday_to_saturday() {
        // Wednesday 4 July 2018
        assert_eq!(
            date_subtitle(&filter(DateFilter::LastWeek), date(2018, 7, 4))
                .unwrap()
                .as_deref(),
            Some("June 24, 2018 - June 30, 2018")
        );
        // A Sunday reference day reaches back to the Sunday before
        assert_eq!(
            date_subtitle(&filter(DateFilter::LastWeek), date(2018, 7, 8))
                .unwrap()
                .as_deref(),
            Some("June 24, 2018 - June 30, 2018")
        );
    }

    #[test]
    fn test_last_month() {
        assert_eq!(
            date_subtitle(&filter(DateFilter::LastMonth), date(2018, 1, 15))
                .unwrap()
                .as_deref(),
            Some("December 2017")
        );
    }

    #[test]
    fn test_no_subtitle() {
        assert_eq!(date_subtitle(&DateParams::default(), date(2018, 7, 4)).unwrap(), None);
        assert_eq!(
            date_subtitle(&filter(DateFilter::Other), date(2018, 7, 4)).unwrap(),
            None
        );
    }
}
