//! The date-indexed price table and borrowed row-range views over it.

use chrono::NaiveDate;

/// One item column (e.g. `cabbage`). `values[i]` belongs to `PriceTable::dates[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Number of non-missing cells.
    pub fn observed(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Daily item prices indexed by a unique, ascending date column.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    items: Vec<PriceSeries>,
}

impl PriceTable {
    /// Build a table from already-sorted rows.
    ///
    /// Callers (the CSV loader, tests) guarantee `dates` is strictly ascending and
    /// every series has one cell per date.
    pub fn new(dates: Vec<NaiveDate>, items: Vec<PriceSeries>) -> Self {
        debug_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(items.iter().all(|s| s.values.len() == dates.len()));
        Self { dates, items }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn items(&self) -> &[PriceSeries] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [PriceSeries] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn series(&self, name: &str) -> Option<&PriceSeries> {
        self.items.iter().find(|s| s.name == name)
    }

    /// Item names in alphabetical order (the order the item picker shows).
    pub fn sorted_item_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// View over every row.
    pub fn full_view(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: 0..self.dates.len(),
        }
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A contiguous run of rows of a `PriceTable`, in table order.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a PriceTable,
    rows: std::ops::Range<usize>,
}

impl<'a> TableView<'a> {
    pub(crate) fn new(table: &'a PriceTable, rows: std::ops::Range<usize>) -> Self {
        Self { table, rows }
    }

    pub fn table(&self) -> &'a PriceTable {
        self.table
    }

    pub fn dates(&self) -> &'a [NaiveDate] {
        &self.table.dates[self.rows.clone()]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cells of `item` that fall inside this view.
    pub fn column(&self, item: &str) -> Option<&'a [Option<f64>]> {
        self.table
            .series(item)
            .map(|s| &s.values[self.rows.clone()])
    }

    /// Iterate `(date, row cells in column order)`.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, Vec<Option<f64>>)> + '_ {
        self.rows.clone().map(move |i| {
            let cells = self.table.items.iter().map(|s| s.values[i]).collect();
            (self.table.dates[i], cells)
        })
    }
}
