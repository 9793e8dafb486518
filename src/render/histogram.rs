//! Bar chart of the edge weight distribution

use std::path::Path;

use plotters::prelude::*;

use super::error::RenderError;
use super::figure::Figure;
use super::palette::TEAL;
use crate::pipeline::WeightHistogram;

/// Figure size in inches (width, height)
pub const HISTOGRAM_FIGURE_IN: (f64, f64) = (10.0, 6.0);

pub const HISTOGRAM_TITLE: &str = "Edge Weight Distribution";
const X_DESC: &str = "Percent of population";
const Y_DESC: &str = "Frequency";

const TITLE_PT: f64 = 16.0;
const AXIS_DESC_PT: f64 = 14.0;
const TICK_PT: f64 = 10.0;

pub fn render_weight_histogram(
    histogram: &WeightHistogram,
    path: &Path,
    dpi: u32,
) -> Result<(), RenderError> {
    let fig = Figure::new(HISTOGRAM_FIGURE_IN.0, HISTOGRAM_FIGURE_IN.1, dpi);
    let (lo, hi) = histogram.range();
    let y_top = (histogram.max_count().max(1) as f64) * 1.05;

    fig.render_png(path, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(HISTOGRAM_TITLE, ("sans-serif", fig.pt(TITLE_PT)))
            .margin(fig.pt(12.0))
            .x_label_area_size(fig.pt(42.0))
            .y_label_area_size(fig.pt(54.0))
            .build_cartesian_2d(lo..hi, 0f64..y_top)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .axis_desc_style(("sans-serif", fig.pt(AXIS_DESC_PT)))
            .label_style(("sans-serif", fig.pt(TICK_PT)))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()?;

        chart.draw_series(
            histogram
                .bins()
                .filter(|&(_, _, count)| count > 0)
                .map(|(x0, x1, count)| {
                    Rectangle::new([(x0, 0.0), (x1, count as f64)], TEAL.filled())
                }),
        )?;

        Ok(())
    })
}
