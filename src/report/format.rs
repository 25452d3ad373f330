//! Plain-text rendering of the dashboard sections.
//!
//! Formatting lives in one place so the data code stays presentation-free and
//! output changes are localized.

use crate::app::pipeline::DashboardView;
use crate::chart::{LineKind, PriceChart, x_to_date};
use crate::domain::{MetricTable, PriceTable, SummaryRow, TableView};

/// Placeholder for undefined numbers.
const UNDEFINED: &str = "-";

/// Render every visible section of one render pass.
pub fn format_dashboard(view: &DashboardView<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", view.title));
    out.push_str(view.instructions);
    out.push_str("\n\n");

    out.push_str(&format!(
        "Rows in range: {}{}\n\n",
        view.filtered.len(),
        range_suffix(&view.filtered)
    ));

    if let Some(chart) = &view.chart {
        out.push_str("Price chart\n");
        out.push_str(&format_chart_summary(chart));
        out.push('\n');
    }

    if let Some(stats) = &view.stats {
        out.push_str("Price statistics (full history)\n");
        out.push_str(&format_stats(stats));
        out.push('\n');
    }

    if let Some(raw) = view.raw() {
        out.push_str("Filtered data\n");
        out.push_str(&format_raw(raw));
        out.push('\n');
    }

    out.push_str("Accuracy summary\n");
    out.push_str(&format_metrics(view.metrics));

    out
}

/// One line per chart series: label, style, color, plotted points and last value.
pub fn format_chart_summary(chart: &PriceChart) -> String {
    let rows: Vec<Vec<String>> = chart
        .lines
        .iter()
        .map(|line| {
            let last = line
                .segments
                .last()
                .and_then(|s| s.last())
                .map(|&(_, y)| fmt_num(Some(y)))
                .unwrap_or_else(|| UNDEFINED.to_string());
            vec![
                line.label.clone(),
                match line.kind {
                    LineKind::Solid => "solid".to_string(),
                    LineKind::Dashed => "dashed".to_string(),
                },
                format!("{:?}", line.color).to_lowercase(),
                line.point_count().to_string(),
                last,
            ]
        })
        .collect();

    let mut out = format_grid(&["series", "line", "color", "points", "last"], &rows);
    let from = x_to_date(chart.x_bounds[0]);
    let to = x_to_date(chart.x_bounds[1]);
    if let (Some(from), Some(to)) = (from, to) {
        out.push_str(&format!("x: {from} .. {to} | y: {:.2} .. {:.2}\n", chart.y_bounds[0], chart.y_bounds[1]));
    }
    out
}

pub fn format_stats(rows: &[SummaryRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.product.clone(),
                fmt_num(r.p25),
                fmt_num(r.median),
                fmt_num(r.p75),
                fmt_num(r.mean),
            ]
        })
        .collect();
    format_grid(
        &["Product", "25th Percentile", "Median", "75th Percentile", "Mean"],
        &cells,
    )
}

pub fn format_raw(view: &TableView<'_>) -> String {
    let mut headers = vec!["date"];
    headers.extend(view.table().items().iter().map(|s| s.name.as_str()));

    let rows: Vec<Vec<String>> = view
        .rows()
        .map(|(date, cells)| {
            let mut row = vec![date.to_string()];
            row.extend(cells.into_iter().map(fmt_num));
            row
        })
        .collect();
    format_grid(&headers, &rows)
}

pub fn format_metrics(metrics: &MetricTable) -> String {
    let mut headers = vec!["product"];
    headers.extend(metrics.columns.iter().map(String::as_str));

    let rows: Vec<Vec<String>> = metrics
        .rows
        .iter()
        .map(|r| {
            let mut row = vec![r.product.clone()];
            row.extend(r.values.iter().cloned());
            row
        })
        .collect();
    format_grid(&headers, &rows)
}

/// Item columns in alphabetical order with observation counts and coverage.
pub fn format_items(table: &PriceTable) -> String {
    let rows: Vec<Vec<String>> = table
        .sorted_item_names()
        .into_iter()
        .filter_map(|name| table.series(name))
        .map(|series| {
            let observed = |i: &usize| series.values[*i].is_some();
            let first = (0..table.len()).find(observed).map(|i| table.dates()[i]);
            let last = (0..table.len()).rev().find(observed).map(|i| table.dates()[i]);
            vec![
                series.name.clone(),
                series.observed().to_string(),
                first.map_or_else(|| UNDEFINED.to_string(), |d| d.to_string()),
                last.map_or_else(|| UNDEFINED.to_string(), |d| d.to_string()),
            ]
        })
        .collect();

    let mut out = format_grid(&["item", "observed", "first", "last"], &rows);
    out.push_str(&format!("{} rows{}\n", table.len(), range_suffix(&table.full_view())));
    out
}

/// Numbers get two decimals; undefined values a dash.
pub fn fmt_num(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.2}"),
        None => UNDEFINED.to_string(),
    }
}

fn range_suffix(view: &TableView<'_>) -> String {
    match (view.dates().first(), view.dates().last()) {
        (Some(a), Some(b)) => format!(" ({a} .. {b})"),
        _ => String::new(),
    }
}

/// Left-aligned first column, right-aligned others, dashed rule under the header.
fn format_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = grid_line(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", rule.join("  ")));
    for row in rows {
        out.push_str(&grid_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn grid_line<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i == 0 {
                format!("{cell:<w$}")
            } else {
                format!("{cell:>w$}")
            }
        })
        .collect();
    format!("{}\n", parts.join("  ").trim_end())
}
