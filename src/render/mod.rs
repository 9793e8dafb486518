//! Render module - draw the three charts as PNG files

pub mod bipartite;
pub mod error;
pub mod figure;
pub mod heatmap;
pub mod histogram;
pub mod palette;

pub use bipartite::*;
pub use error::RenderError;
pub use figure::{Canvas, Figure, DEFAULT_DPI};
pub use heatmap::*;
pub use histogram::*;

/// Output file of the bipartite graph
pub const BIPARTITE_FILE: &str = "bipartite_graph.png";
/// Output file of the edge weight histogram
pub const HISTOGRAM_FILE: &str = "weight_distribution.png";
/// Output file of the language/country heatmap
pub const HEATMAP_FILE: &str = "language_country_heatmap.png";
