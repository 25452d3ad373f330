//! Plotters-powered price chart widget for Ratatui.
//!
//! The terminal and the SVG export share `chart::draw_chart`; this widget only
//! hands it a drawing area backed by `plotters-ratatui-backend`.

use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::chart::{ChartTheme, PriceChart, draw_chart};

pub struct PriceChartWidget<'a> {
    pub chart: &'a PriceChart,
    pub theme: ChartTheme,
}

impl<'a> PriceChartWidget<'a> {
    pub fn new(chart: &'a PriceChart) -> Self {
        Self {
            chart,
            theme: ChartTheme::terminal(),
        }
    }
}

impl Widget for PriceChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters can fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if !drawable(self.chart) {
            return;
        }

        let chart = self.chart;
        let theme = self.theme;
        let widget = widget_fn(move |root| {
            draw_chart(&root, chart, &theme)?;
            Ok(())
        });

        widget.render(area, buf);
    }
}

fn drawable(chart: &PriceChart) -> bool {
    let [x0, x1] = chart.x_bounds;
    let [y0, y1] = chart.y_bounds;
    [x0, x1, y0, y1].iter().all(|v| v.is_finite()) && x1 > x0 && y1 > y0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(x_bounds: [f64; 2], y_bounds: [f64; 2]) -> PriceChart {
        PriceChart {
            lines: Vec::new(),
            x_bounds,
            y_bounds,
        }
    }

    #[test]
    fn degenerate_bounds_are_not_drawn() {
        assert!(drawable(&chart([0.0, 1.0], [0.0, 1.0])));
        assert!(!drawable(&chart([1.0, 1.0], [0.0, 1.0])));
        assert!(!drawable(&chart([0.0, 1.0], [f64::NAN, 1.0])));
    }

    #[test]
    fn small_area_renders_a_hint() {
        let c = chart([0.0, 1.0], [0.0, 1.0]);
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        PriceChartWidget::new(&c).render(area, &mut buf);
        let first_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(first_row.starts_with("Chart area too small"));
    }
}
