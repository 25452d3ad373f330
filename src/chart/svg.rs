//! SVG image output for the price chart.

use std::path::Path;

use plotters::prelude::*;

use crate::chart::{ChartTheme, PriceChart, draw_chart};
use crate::error::AppError;

/// Default export size in pixels (a wide 2:1 figure).
pub const DEFAULT_SIZE: (u32, u32) = (1400, 700);

/// Render `chart` to an SVG file at `path`.
pub fn write_svg(path: &Path, chart: &PriceChart, size: (u32, u32)) -> Result<(), AppError> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(&root, chart, &ChartTheme::paper())
        .map_err(|e| AppError::new(4, format!("Failed to draw chart: {e}")))?;
    root.present().map_err(|e| {
        AppError::new(4, format!("Failed to write chart SVG '{}': {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), lines = chart.lines.len(), "exported chart (svg)");
    Ok(())
}

/// Render `chart` to an in-memory SVG document.
pub fn render_svg_string(chart: &PriceChart, size: (u32, u32)) -> Result<String, AppError> {
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, size).into_drawing_area();
        draw_chart(&root, chart, &ChartTheme::paper())
            .map_err(|e| AppError::new(4, format!("Failed to draw chart: {e}")))?;
        root.present()
            .map_err(|e| AppError::new(4, format!("Failed to finish chart SVG: {e}")))?;
    }
    Ok(out)
}
