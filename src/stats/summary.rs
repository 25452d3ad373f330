//! Percentile/mean summary per item.
//!
//! Always computed over the whole (masked) table: the date filter narrows the
//! chart, never the statistics.

use crate::domain::{PriceTable, SummaryRow};

/// Linear-interpolation percentile of an ascending, non-empty slice.
///
/// `pct` is in `[0, 100]`; the rank is `pct / 100 * (n - 1)` and fractional ranks
/// interpolate between the neighbouring order statistics.
pub fn percentile_sorted(sorted: &[f64], pct: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&pct) {
        return None;
    }

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Summary of one item's observed cells. All fields are `None` without observations.
pub fn summarize_values(product: &str, cells: &[Option<f64>]) -> SummaryRow {
    let mut observed: Vec<f64> = cells.iter().flatten().copied().collect();
    observed.sort_by(f64::total_cmp);

    SummaryRow {
        product: product.to_string(),
        p25: percentile_sorted(&observed, 25.0),
        median: percentile_sorted(&observed, 50.0),
        p75: percentile_sorted(&observed, 75.0),
        mean: mean(&observed),
    }
}

/// One row per selected item, in selection order.
///
/// Items the table doesn't contain produce an all-`None` row.
pub fn summarize(table: &PriceTable, items: &[String]) -> Vec<SummaryRow> {
    items
        .iter()
        .map(|item| match table.series(item) {
            Some(series) => summarize_values(item, &series.values),
            None => summarize_values(item, &[]),
        })
        .collect()
}
