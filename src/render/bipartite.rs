//! Two-column drawing of the country/language graph

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::error::RenderError;
use super::figure::Figure;
use super::palette::{GRAY, ORANGE, SKY_BLUE, TEXT};
use crate::pipeline::{BipartiteGraph, DEFAULT_Y_GAP};

/// Figure size in inches (width, height)
pub const BIPARTITE_FIGURE_IN: (f64, f64) = (30.0, 60.0);

/// Marker areas in square points
const COUNTRY_NODE_AREA: f64 = 800.0;
const LANGUAGE_NODE_AREA: f64 = 500.0;

const EDGE_OPACITY: f64 = 0.4;
const EDGE_WIDTH_PT: f64 = 1.2;
const LABEL_PT: f64 = 11.0;
const TITLE_PT: f64 = 30.0;

/// Horizontal extent of the plot in layout units
const X_EXTENT: f64 = 1.25;

/// Title shown above the graph for a given filter threshold
pub fn bipartite_title(min_percent: f64) -> String {
    format!(
        "Country\u{2013}Language Bipartite Graph (Filtered >{}%)",
        min_percent
    )
}

/// Render the graph with countries in the left column and languages in the
/// right one, every node labelled, edges drawn underneath in translucent gray.
pub fn render_bipartite(
    graph: &BipartiteGraph,
    min_percent: f64,
    path: &Path,
    dpi: u32,
) -> Result<(), RenderError> {
    let fig = Figure::new(BIPARTITE_FIGURE_IN.0, BIPARTITE_FIGURE_IN.1, dpi);
    let layout = graph.column_layout(DEFAULT_Y_GAP);
    let title = bipartite_title(min_percent);

    fig.render_png(path, |root| {
        let y_max = layout.max_y();
        let mut chart = ChartBuilder::on(root)
            .caption(&title, ("sans-serif", fig.pt(TITLE_PT)))
            .margin(fig.pt(24.0))
            .build_cartesian_2d(-X_EXTENT..X_EXTENT, -DEFAULT_Y_GAP..y_max + DEFAULT_Y_GAP)?;

        // no axes: nodes and edges only
        let edge_style = GRAY.mix(EDGE_OPACITY).stroke_width(fig.pt_px(EDGE_WIDTH_PT));
        chart.draw_series(graph.edges().iter().map(|edge| {
            PathElement::new(
                vec![layout.countries[edge.country], layout.languages[edge.language]],
                edge_style,
            )
        }))?;

        let country_radius = marker_radius(&fig, COUNTRY_NODE_AREA);
        chart.draw_series(
            layout
                .countries
                .iter()
                .map(|&pos| Circle::new(pos, country_radius, SKY_BLUE.filled())),
        )?;

        let language_radius = marker_radius(&fig, LANGUAGE_NODE_AREA);
        chart.draw_series(
            layout
                .languages
                .iter()
                .map(|&pos| Circle::new(pos, language_radius, ORANGE.filled())),
        )?;

        let label_style = TextStyle::from(("sans-serif", fig.pt(LABEL_PT)).into_font())
            .color(&TEXT)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let labels = graph
            .countries()
            .iter()
            .zip(layout.countries.iter())
            .chain(graph.languages().iter().zip(layout.languages.iter()));
        chart.draw_series(
            labels.map(|(label, &pos)| Text::new(label.clone(), pos, label_style.clone())),
        )?;

        Ok(())
    })
}

/// Radius in pixels of a circle whose area is `area_pt2` square points
fn marker_radius(fig: &Figure, area_pt2: f64) -> u32 {
    fig.pt_px(area_pt2.sqrt() / 2.0)
}
