//! Header and row synthesis for table rendering

use crate::output::{Cell, Series, XAxisConfig};
use crate::source::saturating_total;

/// Axis title, one header per series, then the total header for stacked tables
pub fn headers(x_axis: &XAxisConfig, series: &[Series], total: Option<&str>) -> Vec<String> {
    let mut headers = Vec::with_capacity(series.len() + 2);
    headers.push(x_axis.title.text.clone());
    headers.extend(series.iter().map(|s| s.name.clone()));
    if let Some(total) = total {
        headers.push(total.to_string());
    }
    headers
}

/// One row per category: label, each series' count, then the row total if requested
pub fn rows(x_axis: &XAxisConfig, series: &[Series], with_total: bool) -> Vec<Vec<Cell>> {
    x_axis
        .categories
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let counts: Vec<u64> = series
                .iter()
                .map(|s| s.data.get(index).copied().unwrap_or(0))
                .collect();

            let mut row = Vec::with_capacity(counts.len() + 2);
            row.push(Cell::Label(label.clone()));
            if with_total {
                let total = saturating_total(counts.iter().copied());
                row.extend(counts.into_iter().map(Cell::Count));
                row.push(Cell::Count(total));
            } else {
                row.extend(counts.into_iter().map(Cell::Count));
            }
            row
        })
        .collect()
}
