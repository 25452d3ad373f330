/// Precomputed accuracy metrics, one row per product, kept exactly as read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricTable {
    /// Metric column headers, excluding `product`.
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub product: String,
    /// One raw cell per entry of `MetricTable::columns`.
    pub values: Vec<String>,
}

impl MetricTable {
    pub fn row(&self, product: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.product == product)
    }
}
