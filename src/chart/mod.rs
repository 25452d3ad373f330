//! Price chart: backend-independent model plus Plotters drawing.
//!
//! `build_chart` turns a date-filtered view and the selected items into a
//! `PriceChart` (lines, colors, bounds). `draw::draw_chart` paints that model on
//! any Plotters drawing area; the TUI and the SVG export both go through it.

use chrono::{Datelike, NaiveDate};

use crate::domain::{RollingWindow, TableView};
use crate::stats::rolling_mean;

pub mod draw;
pub mod svg;

pub use draw::{draw_chart, ChartTheme};
pub use svg::write_svg;

pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Price";

/// Fixed series palette; the i-th selected item gets `PALETTE[i % 7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

pub const PALETTE: [SeriesColor; 7] = [
    SeriesColor::Blue,
    SeriesColor::Green,
    SeriesColor::Red,
    SeriesColor::Cyan,
    SeriesColor::Magenta,
    SeriesColor::Yellow,
    SeriesColor::Black,
];

impl SeriesColor {
    pub fn for_index(i: usize) -> Self {
        PALETTE[i % PALETTE.len()]
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Blue => (0, 0, 255),
            SeriesColor::Green => (0, 128, 0),
            SeriesColor::Red => (255, 0, 0),
            SeriesColor::Cyan => (0, 191, 191),
            SeriesColor::Magenta => (191, 0, 191),
            SeriesColor::Yellow => (191, 191, 0),
            SeriesColor::Black => (0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Raw prices.
    Solid,
    /// Rolling mean.
    Dashed,
}

/// One legend entry. Missing values split the line into separate segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub color: SeriesColor,
    pub kind: LineKind,
    /// `(x, price)` runs; `x` is a day number (see `date_to_x`).
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl ChartLine {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// A render-only chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub lines: Vec<ChartLine>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Build the overlay chart for `items` (selection order) over a filtered view.
///
/// Returns `None` when nothing is selected. Each item contributes a solid raw line
/// and a dashed `window`-day rolling mean in the same palette color.
pub fn build_chart(view: &TableView<'_>, items: &[String], window: RollingWindow) -> Option<PriceChart> {
    if items.is_empty() {
        return None;
    }

    let xs: Vec<f64> = view.dates().iter().map(|d| date_to_x(*d)).collect();
    let mut lines = Vec::with_capacity(items.len() * 2);

    for (i, item) in items.iter().enumerate() {
        let Some(cells) = view.column(item) else {
            continue;
        };
        let color = SeriesColor::for_index(i);

        lines.push(ChartLine {
            label: item.clone(),
            color,
            kind: LineKind::Solid,
            segments: segments(&xs, cells),
        });
        lines.push(ChartLine {
            label: format!("{item} ({}-day Rolling Mean)", window.get()),
            color,
            kind: LineKind::Dashed,
            segments: segments(&xs, &rolling_mean(cells, window.get())),
        });
    }

    Some(PriceChart {
        x_bounds: x_bounds(&xs),
        y_bounds: y_bounds(&lines),
        lines,
    })
}

/// Day number used as the chart's x coordinate.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn segments(xs: &[f64], cells: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (x, cell) in xs.iter().zip(cells) {
        match cell {
            Some(y) => current.push((*x, *y)),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn x_bounds(xs: &[f64]) -> [f64; 2] {
    match (xs.first(), xs.last()) {
        (Some(&a), Some(&b)) if b > a => [a, b],
        // A single day (or nothing) still needs a non-empty axis.
        (Some(&a), _) => [a - 1.0, a + 1.0],
        _ => {
            let today = date_to_x(chrono::Local::now().date_naive());
            [today - 1.0, today + 1.0]
        }
    }
}

fn y_bounds(lines: &[ChartLine]) -> [f64; 2] {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for (_, y) in lines.iter().flat_map(|l| l.segments.iter().flatten()) {
        lo = lo.min(*y);
        hi = hi.max(*y);
    }

    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if hi <= lo {
        let pad = (lo.abs() * 0.05).max(1.0);
        return [lo - pad, hi + pad];
    }
    let pad = (hi - lo) * 0.05;
    [lo - pad, hi + pad]
}
