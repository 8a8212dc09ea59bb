//! Revenue bar chart rendering.
//!
//! Draws one bar per product with revenue on the y-axis and writes the
//! result as an SVG file. The SVG backend is pure Rust, so rendering works
//! on hosts with no display and no system font libraries.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::ProductSummary;
use crate::error::{Error, Result};

/// Bar fill color matching CSS "skyblue".
const SKYBLUE: RGBColor = RGBColor(135, 206, 235);

/// Chart canvas size in pixels.
const CHART_SIZE: (u32, u32) = (600, 400);

/// Render the revenue-by-product bar chart to `path`.
///
/// An empty summary still produces a valid captioned image so the output
/// file exists on every successful run.
///
/// # Errors
/// Returns [`Error::Chart`] if drawing fails and [`Error::Io`] if the
/// output directory cannot be created.
pub fn render(path: &Path, rows: &[ProductSummary]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| Error::Chart(e.to_string()))?;

    if rows.is_empty() {
        root.titled("Revenue by Product", ("sans-serif", 24))
            .map_err(|e| Error::Chart(e.to_string()))?;
        return root.present().map_err(|e| Error::Chart(e.to_string()));
    }

    let y_max = {
        let max = rows.iter().fold(0.0_f64, |acc, row| acc.max(row.revenue));
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Revenue by Product", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..rows.len()).into_segmented(), 0.0..y_max)
        .map_err(|e| Error::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len().max(1))
        .x_desc("Product")
        .y_desc("Revenue")
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => rows
                .get(*index)
                .map(|row| row.product.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| Error::Chart(e.to_string()))?;

    chart
        .draw_series(rows.iter().enumerate().map(|(index, row)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), row.revenue),
                ],
                SKYBLUE.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| Error::Chart(e.to_string()))?;

    root.present().map_err(|e| Error::Chart(e.to_string()))
}
