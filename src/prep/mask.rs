//! Quality mask: known data gaps after a cutoff date.
//!
//! Several items stopped being collected after 2020-09-28; whatever the source
//! file holds for them afterwards is not trusted and is blanked out before anything
//! else looks at the table.

use chrono::NaiveDate;

use crate::domain::PriceTable;

/// Items whose prices are unavailable after the cutoff.
pub const MASKED_ITEMS: [&str; 7] = [
    "cabbage", "radish", "garlic", "onion", "daikon", "cilantro", "artichoke",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityMask {
    /// Rows strictly after this date are masked.
    pub cutoff: NaiveDate,
    pub columns: Vec<String>,
}

impl Default for QualityMask {
    fn default() -> Self {
        Self {
            cutoff: NaiveDate::from_ymd_opt(2020, 9, 28).expect("valid cutoff date"),
            columns: MASKED_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl QualityMask {
    /// Blank out masked columns for rows after the cutoff.
    ///
    /// Columns the table doesn't have are skipped. Returns the number of cells that
    /// went from observed to missing.
    pub fn apply(&self, table: &mut PriceTable) -> usize {
        let first_masked_row = table.dates().partition_point(|d| *d <= self.cutoff);
        let mut cleared = 0usize;

        for series in table.items_mut() {
            if !self.columns.iter().any(|c| *c == series.name) {
                continue;
            }
            for cell in &mut series.values[first_masked_row..] {
                if cell.take().is_some() {
                    cleared += 1;
                }
            }
        }

        cleared
    }
}
