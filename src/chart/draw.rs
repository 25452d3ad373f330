//! Plotters drawing for `PriceChart`.
//!
//! Drawing is generic over the Plotters backend so the same code paints into the
//! terminal (via `plotters-ratatui-backend`) and into SVG files.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::chart::{LineKind, PriceChart, SeriesColor, X_LABEL, Y_LABEL, x_to_date};

/// Colors and sizes for one output surface.
#[derive(Debug, Clone, Copy)]
pub struct ChartTheme {
    /// `None` leaves the surface as is (the terminal keeps its own background).
    pub background: Option<RGBColor>,
    pub foreground: RGBColor,
    pub grid: RGBColor,
    pub font_size: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub ticks: usize,
    pub line_width: u32,
    /// Draw the black palette entry in the foreground color (dark terminals).
    pub invert_black: bool,
}

impl ChartTheme {
    /// White paper, used for image exports.
    pub fn paper() -> Self {
        Self {
            background: Some(WHITE),
            foreground: BLACK,
            grid: RGBColor(211, 211, 211),
            font_size: 14,
            margin: 20,
            x_label_area: 50,
            y_label_area: 70,
            ticks: 8,
            line_width: 2,
            invert_black: false,
        }
    }

    /// Low-resolution, dark-background terminal rendering.
    pub fn terminal() -> Self {
        Self {
            background: None,
            foreground: WHITE,
            grid: RGBColor(90, 90, 90),
            font_size: 10,
            margin: 1,
            x_label_area: 3,
            y_label_area: 6,
            ticks: 5,
            line_width: 1,
            invert_black: true,
        }
    }

    pub fn series_color(&self, color: SeriesColor) -> RGBColor {
        if self.invert_black && color == SeriesColor::Black {
            return self.foreground;
        }
        let (r, g, b) = color.rgb();
        RGBColor(r, g, b)
    }
}

/// Paint `chart` onto `root`: axes, dashed grid, every line, then the legend.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &PriceChart,
    theme: &ChartTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    if let Some(bg) = theme.background {
        root.fill(&bg)?;
    }

    let [x0, x1] = chart.x_bounds;
    let [y0, y1] = chart.y_bounds;

    let mut cc = ChartBuilder::on(root)
        .margin(theme.margin)
        .set_label_area_size(LabelAreaPosition::Left, theme.y_label_area)
        .set_label_area_size(LabelAreaPosition::Bottom, theme.x_label_area)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let fmt_x = |v: &f64| x_to_date(*v).map(|d| d.to_string()).unwrap_or_default();
    let fmt_y = |v: &f64| format!("{v:.0}");

    // The mesh provides axes and tick labels; grid lines are drawn dashed below.
    cc.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(theme.ticks)
        .y_labels(theme.ticks)
        .x_label_formatter(&fmt_x)
        .y_label_formatter(&fmt_y)
        .label_style(("sans-serif", theme.font_size).into_font().color(&theme.foreground))
        .axis_style(&theme.foreground)
        .draw()?;

    let grid = theme.grid.stroke_width(1);
    for x in grid_positions(x0, x1, theme.ticks) {
        cc.draw_series(DashedLineSeries::new(vec![(x, y0), (x, y1)], 4, 4, grid))?;
    }
    for y in grid_positions(y0, y1, theme.ticks) {
        cc.draw_series(DashedLineSeries::new(vec![(x0, y), (x1, y)], 4, 4, grid))?;
    }

    for line in &chart.lines {
        let style = theme.series_color(line.color).stroke_width(theme.line_width);
        let mut labelled = false;

        for segment in &line.segments {
            let points = segment.iter().copied();
            let anno = match line.kind {
                LineKind::Solid => cc.draw_series(LineSeries::new(points, style))?,
                LineKind::Dashed => cc.draw_series(DashedLineSeries::new(points, 6, 4, style))?,
            };
            // One legend entry per line, however many segments it has.
            if !labelled {
                anno.label(line.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], style));
                labelled = true;
            }
        }
    }

    if chart.lines.iter().any(|l| !l.segments.is_empty()) {
        let legend_bg = theme.background.unwrap_or(BLACK);
        cc.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&legend_bg.mix(0.8))
            .border_style(&theme.grid)
            .label_font(("sans-serif", theme.font_size).into_font().color(&theme.foreground))
            .draw()?;
    }

    Ok(())
}

/// `n` evenly spaced interior positions between `lo` and `hi`.
fn grid_positions(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 0 || !(hi > lo) {
        return Vec::new();
    }
    let step = (hi - lo) / (n as f64 + 1.0);
    (1..=n).map(|i| lo + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_positions_are_interior_and_even() {
        let ys = grid_positions(0.0, 10.0, 4);
        assert_eq!(ys, vec![2.0, 4.0, 6.0, 8.0]);
        assert!(grid_positions(5.0, 5.0, 4).is_empty());
        assert!(grid_positions(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn terminal_theme_keeps_black_series_visible() {
        let terminal = ChartTheme::terminal();
        assert_eq!(terminal.series_color(SeriesColor::Black), WHITE);
        assert_eq!(terminal.series_color(SeriesColor::Red), RGBColor(255, 0, 0));
        assert_eq!(ChartTheme::paper().series_color(SeriesColor::Black), RGBColor(0, 0, 0));
    }
}
