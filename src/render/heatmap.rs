//! Color-scaled grid of the language x country matrix
//!
//! Drawn directly in pixel space: a title strip, the cell grid with language
//! labels on the left and rotated country labels underneath, and a vertical
//! colorbar on the right.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::error::RenderError;
use super::figure::{Canvas, Figure};
use super::palette::{BU_GN, GRAY, TEXT};
use crate::pipeline::HeatmapMatrix;

/// Figure size in inches (width, height)
pub const HEATMAP_FIGURE_IN: (f64, f64) = (16.0, 10.0);

const TITLE_PT: f64 = 16.0;
const ROW_LABEL_PT: f64 = 8.0;
const COLUMN_LABEL_PT: f64 = 10.0;
const COLORBAR_LABEL_PT: f64 = 10.0;
const CELL_BORDER_PT: f64 = 0.2;
const COLORBAR_TICKS: usize = 5;
const COLORBAR_LABEL: &str = "Percent (%)";

pub fn heatmap_title(top_n: usize) -> String {
    format!(
        "Heatmap: Top {} Spoken Languages Across Countries (WVS Q272)",
        top_n
    )
}

/// Pixel geometry of the cell grid and the colorbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub left: f64,
    pub top: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub rows: usize,
    pub columns: usize,
}

impl GridGeometry {
    /// Fit `rows x columns` cells into the box `(left, top)..(right, bottom)`
    pub fn fit(
        (left, top): (f64, f64),
        (right, bottom): (f64, f64),
        rows: usize,
        columns: usize,
    ) -> Option<Self> {
        if rows == 0 || columns == 0 || right <= left || bottom <= top {
            return None;
        }
        Some(Self {
            left,
            top,
            cell_width: (right - left) / columns as f64,
            cell_height: (bottom - top) / rows as f64,
            rows,
            columns,
        })
    }

    /// Corners of a cell; row 0 is the top row
    pub fn cell(&self, row: usize, col: usize) -> [(i32, i32); 2] {
        let x0 = self.left + col as f64 * self.cell_width;
        let y0 = self.top + row as f64 * self.cell_height;
        [
            (x0.round() as i32, y0.round() as i32),
            (
                (x0 + self.cell_width).round() as i32,
                (y0 + self.cell_height).round() as i32,
            ),
        ]
    }

    pub fn right(&self) -> f64 {
        self.left + self.cell_width * self.columns as f64
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.cell_height * self.rows as f64
    }

    pub fn row_center(&self, row: usize) -> i32 {
        (self.top + (row as f64 + 0.5) * self.cell_height).round() as i32
    }

    pub fn column_center(&self, col: usize) -> i32 {
        (self.left + (col as f64 + 0.5) * self.cell_width).round() as i32
    }
}

/// Render the matrix with rows in matrix order from top to bottom.
///
/// Colors run over the BuGn scale from the smallest to the largest cell.
pub fn render_heatmap(
    matrix: &HeatmapMatrix,
    top_n: usize,
    path: &Path,
    dpi: u32,
) -> Result<(), RenderError> {
    let (rows, columns) = matrix.shape();
    let Some((vmin, vmax)) = matrix.value_range().filter(|_| rows > 0 && columns > 0) else {
        return Err(RenderError::EmptyHeatmap { rows, columns });
    };

    let fig = Figure::new(HEATMAP_FIGURE_IN.0, HEATMAP_FIGURE_IN.1, dpi);
    let title = heatmap_title(top_n);

    fig.render_png(path, |root| {
        let (width, height) = root.dim_in_pixel();
        let pad = fig.pt(12.0);

        let title_style = TextStyle::from(("sans-serif", fig.pt(TITLE_PT)).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let row_style = TextStyle::from(("sans-serif", fig.pt(ROW_LABEL_PT)).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let column_style = TextStyle::from(("sans-serif", fig.pt(COLUMN_LABEL_PT)).into_font())
            .color(&TEXT);
        let bar_style = TextStyle::from(("sans-serif", fig.pt(COLORBAR_LABEL_PT)).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Left, VPos::Center));

        let row_label_width = widest(root, matrix.languages(), &row_style)?;
        let column_label_height = widest(root, matrix.countries(), &column_style)?;
        let tick_labels: Vec<String> = colorbar_ticks(vmin, vmax)
            .into_iter()
            .map(|v| format_tick(v, vmax - vmin))
            .collect();
        let tick_label_width = widest(root, tick_labels.as_slice(), &bar_style)?;

        let bar_width = fig.pt(14.0);
        let bar_gap = fig.pt(18.0);
        let tick_len = fig.pt(3.5);
        let bar_label_band = fig.pt(COLORBAR_LABEL_PT) * 2.0;

        let left = pad + row_label_width + fig.pt(6.0);
        let top = pad + fig.pt(TITLE_PT) * 2.2;
        let right = width as f64
            - pad
            - bar_label_band
            - tick_label_width
            - tick_len
            - fig.pt(2.0)
            - bar_width
            - bar_gap;
        let bottom = height as f64 - pad - column_label_height - fig.pt(6.0);

        let grid = GridGeometry::fit((left, top), (right, bottom), rows, columns).ok_or_else(
            || RenderError::Drawing("figure is too small for the heatmap labels".to_string()),
        )?;

        root.draw_text(&title, &title_style, ((width / 2) as i32, pad.round() as i32))?;

        let border = GRAY.stroke_width(fig.pt_px(CELL_BORDER_PT));
        for row in 0..rows {
            for col in 0..columns {
                let value = matrix.get(row, col).unwrap_or(0.0);
                let corners = grid.cell(row, col);
                root.draw(&Rectangle::new(corners, BU_GN.map(value, vmin, vmax).filled()))?;
                root.draw(&Rectangle::new(corners, border))?;
            }
        }

        let row_label_x = (grid.left - fig.pt(4.0)).round() as i32;
        for (row, language) in matrix.languages().iter().enumerate() {
            root.draw_text(language, &row_style, (row_label_x, grid.row_center(row)))?;
        }

        // reads bottom-to-top, anchored just under the grid
        let rotated = column_style
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let column_label_y = (grid.bottom() + fig.pt(4.0)).round() as i32;
        for (col, country) in matrix.countries().iter().enumerate() {
            root.draw_text(country, &rotated, (grid.column_center(col), column_label_y))?;
        }

        let bar_left = grid.right() + bar_gap;
        draw_colorbar(
            root,
            &fig,
            (bar_left, grid.top),
            (bar_left + bar_width, grid.bottom()),
            (vmin, vmax),
            &tick_labels,
            &bar_style,
        )?;

        let label_style = bar_style
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let label_x = (width as f64 - pad - bar_label_band / 2.0).round() as i32;
        let label_y = ((grid.top + grid.bottom()) / 2.0).round() as i32;
        root.draw_text(COLORBAR_LABEL, &label_style, (label_x, label_y))?;

        Ok(())
    })
}

fn draw_colorbar(
    root: &Canvas<'_>,
    fig: &Figure,
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    (vmin, vmax): (f64, f64),
    tick_labels: &[String],
    tick_style: &TextStyle,
) -> Result<(), RenderError> {
    let (left, right) = (x0.round() as i32, x1.round() as i32);
    let (top, bottom) = (y0.round() as i32, y1.round() as i32);
    let span = (bottom - top).max(1) as f64;

    for y in top..bottom {
        let t = 1.0 - (y - top) as f64 / span;
        root.draw(&Rectangle::new(
            [(left, y), (right, y + 1)],
            BU_GN.at(t).filled(),
        ))?;
    }
    root.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        GRAY.stroke_width(fig.pt_px(0.5)),
    ))?;

    let tick_len = fig.pt(3.5).round() as i32;
    let tick_style_line = TEXT.stroke_width(fig.pt_px(0.8));
    for (value, label) in colorbar_ticks(vmin, vmax).into_iter().zip(tick_labels) {
        let t = if vmax > vmin {
            (value - vmin) / (vmax - vmin)
        } else {
            0.0
        };
        let y = (bottom as f64 - t * span).round() as i32;
        root.draw(&PathElement::new(
            vec![(right, y), (right + tick_len, y)],
            tick_style_line,
        ))?;
        root.draw_text(
            label,
            tick_style,
            (right + tick_len + fig.pt(2.0).round() as i32, y),
        )?;
    }

    Ok(())
}

/// Evenly spaced tick values from `vmin` to `vmax` inclusive
fn colorbar_ticks(vmin: f64, vmax: f64) -> Vec<f64> {
    if vmax <= vmin {
        return vec![vmin];
    }
    let step = (vmax - vmin) / (COLORBAR_TICKS - 1) as f64;
    (0..COLORBAR_TICKS).map(|i| vmin + step * i as f64).collect()
}

fn format_tick(value: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Widest rendered label in pixels (0 when there are no labels)
fn widest<S: AsRef<str>>(
    root: &Canvas<'_>,
    labels: &[S],
    style: &TextStyle,
) -> Result<f64, RenderError> {
    let mut max = 0u32;
    for label in labels {
        let (w, _) = root.estimate_text_size(label.as_ref(), style)?;
        max = max.max(w);
    }
    Ok(max as f64)
}
