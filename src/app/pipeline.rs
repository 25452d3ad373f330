//! Shared "render pass" logic used by both the report command and the TUI.
//!
//! One pass: filter the masked table by date → build the chart for the selected
//! items → summarize those items over the full history → attach the raw view and
//! the metric table. Front-ends only decide how to present the result.

use std::path::Path;
use std::sync::Arc;

use crate::chart::{PriceChart, build_chart};
use crate::domain::{MetricTable, PriceTable, SummaryRow, TableView, ViewState};
use crate::error::AppError;
use crate::io::{TableCache, load_metric_table, validate_csv_path};
use crate::prep::filter_by_date;
use crate::stats::summarize;

pub const TITLE: &str = "Produce Price Forecast Dashboard";
pub const INSTRUCTIONS: &str = "Pick items, a date range and a rolling window in the sidebar to \
compare price history; forecast accuracy for each product is listed at the bottom.";

/// The two loaded inputs. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub table: Arc<PriceTable>,
    pub metrics: Arc<MetricTable>,
}

/// Everything one render pass shows. Optional sections are `None` when hidden.
#[derive(Debug)]
pub struct DashboardView<'a> {
    pub title: &'static str,
    pub instructions: &'static str,
    /// `None` when no items are selected.
    pub chart: Option<PriceChart>,
    /// `None` when no items are selected.
    pub stats: Option<Vec<SummaryRow>>,
    /// The date-filtered table; always computed, shown when `show_raw` is set.
    pub filtered: TableView<'a>,
    pub show_raw: bool,
    pub metrics: &'a MetricTable,
}

impl<'a> DashboardView<'a> {
    /// The raw-table section, if toggled on.
    pub fn raw(&self) -> Option<&TableView<'a>> {
        self.show_raw.then_some(&self.filtered)
    }
}

impl Dashboard {
    pub fn new(table: Arc<PriceTable>, metrics: Arc<MetricTable>) -> Self {
        Self { table, metrics }
    }

    /// Load both inputs; the price table goes through (and stays in) `cache`.
    pub fn load(cache: &TableCache, data: &Path, metrics: &Path) -> Result<Self, AppError> {
        let data = validate_csv_path(data)?;
        let metrics_path = validate_csv_path(metrics)?;

        let table = cache.get_or_load(&data)?;
        let metrics = load_metric_table(&metrics_path)?;
        tracing::info!(
            path = %metrics_path.display(),
            products = metrics.rows.len(),
            columns = metrics.columns.len(),
            "loaded metric summary"
        );

        Ok(Self::new(table, Arc::new(metrics)))
    }

    pub fn default_view(&self) -> ViewState {
        ViewState::initial(&self.table)
    }

    /// Run one render pass for `state`.
    pub fn render(&self, state: &ViewState) -> DashboardView<'_> {
        let filtered = filter_by_date(&self.table, state.range);

        let (chart, stats) = if state.items.is_empty() {
            (None, None)
        } else {
            (
                build_chart(&filtered, &state.items, state.window),
                // Whole history on purpose: the date range only narrows the chart.
                Some(summarize(&self.table, &state.items)),
            )
        };

        tracing::debug!(
            start = %state.range.start,
            end = %state.range.end,
            items = state.items.len(),
            window = state.window.get(),
            rows = filtered.len(),
            "render pass"
        );

        DashboardView {
            title: TITLE,
            instructions: INSTRUCTIONS,
            chart,
            stats,
            filtered,
            show_raw: state.show_raw,
            metrics: &self.metrics,
        }
    }
}
