//! Per-interaction view state and the rows the statistics section shows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{DateRange, PriceTable};
use crate::error::AppError;

/// Trailing window size for the rolling-mean overlay, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingWindow(usize);

impl RollingWindow {
    pub const MIN: usize = 1;
    pub const MAX: usize = 30;
    pub const DEFAULT: usize = 7;

    pub fn new(size: usize) -> Result<Self, AppError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(AppError::new(
                2,
                format!(
                    "Rolling window must be between {} and {} (got {size}).",
                    Self::MIN,
                    Self::MAX
                ),
            ));
        }
        Ok(Self(size))
    }

    /// Clamp into range; used by the slider, which can't fail.
    pub fn clamped(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn step(self, delta: i32) -> Self {
        let next = if delta >= 0 {
            self.0.saturating_add(delta as usize)
        } else {
            self.0.saturating_sub(delta.unsigned_abs() as usize)
        };
        Self::clamped(next)
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Everything the user controls. Rebuilt on every interaction, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub range: DateRange,
    /// Selected items in selection order (drives palette assignment).
    pub items: Vec<String>,
    pub window: RollingWindow,
    pub show_raw: bool,
}

impl ViewState {
    /// Full observed range, nothing selected, default window, raw table hidden.
    ///
    /// An empty table gets a degenerate `today..today` range; every filter over it
    /// is empty anyway.
    pub fn initial(table: &PriceTable) -> Self {
        let fallback = chrono::Local::now().date_naive();
        Self {
            range: DateRange::new(
                table.first_date().unwrap_or(fallback),
                table.last_date().unwrap_or(fallback),
            ),
            items: Vec::new(),
            window: RollingWindow::default(),
            show_raw: false,
        }
    }

    /// Build a view state from optional overrides, validating item names.
    pub fn from_parts(
        table: &PriceTable,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        items: &[String],
        window: usize,
        show_raw: bool,
    ) -> Result<Self, AppError> {
        let mut state = Self::initial(table);
        if let Some(start) = start {
            state.range.start = start;
        }
        if let Some(end) = end {
            state.range.end = end;
        }
        state.window = RollingWindow::new(window)?;
        state.show_raw = show_raw;

        for item in items {
            if table.series(item).is_none() {
                return Err(AppError::new(
                    2,
                    format!(
                        "Unknown item '{item}'. Known items: {}",
                        table.sorted_item_names().join(", ")
                    ),
                ));
            }
            if !state.items.contains(item) {
                state.items.push(item.clone());
            }
        }
        Ok(state)
    }

    /// Add `item` at the end of the selection, or remove it if already selected.
    pub fn toggle_item(&mut self, item: &str) {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
        } else {
            self.items.push(item.to_string());
        }
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}

/// Percentiles and mean of one item over its whole history.
///
/// `None` means the item had no observations at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub product: String,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub mean: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceSeries;

    fn table() -> PriceTable {
        PriceTable::new(
            vec![
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            ],
            vec![
                PriceSeries {
                    name: "onion".to_string(),
                    values: vec![Some(1.0), Some(2.0)],
                },
                PriceSeries {
                    name: "garlic".to_string(),
                    values: vec![None, Some(5.0)],
                },
            ],
        )
    }

    #[test]
    fn window_bounds_are_enforced() {
        assert!(RollingWindow::new(0).is_err());
        assert!(RollingWindow::new(31).is_err());
        assert_eq!(RollingWindow::new(30).unwrap().get(), 30);
        assert_eq!(RollingWindow::default().get(), 7);
        assert_eq!(RollingWindow::clamped(99).get(), 30);
        assert_eq!(RollingWindow::new(1).unwrap().step(-1).get(), 1);
        assert_eq!(RollingWindow::default().step(3).get(), 10);
    }

    #[test]
    fn initial_state_spans_the_table() {
        let t = table();
        let state = ViewState::initial(&t);
        assert_eq!(state.range.start, t.first_date().unwrap());
        assert_eq!(state.range.end, t.last_date().unwrap());
        assert!(state.items.is_empty());
        assert!(!state.show_raw);
    }

    #[test]
    fn unknown_items_are_rejected() {
        let err = ViewState::from_parts(&table(), None, None, &["leek".to_string()], 7, false)
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("garlic, onion"));
    }

    #[test]
    fn toggling_keeps_selection_order() {
        let mut state = ViewState::initial(&table());
        state.toggle_item("onion");
        state.toggle_item("garlic");
        assert_eq!(state.items, vec!["onion", "garlic"]);
        state.toggle_item("onion");
        assert_eq!(state.items, vec!["garlic"]);
        assert!(state.is_selected("garlic"));
    }
}
