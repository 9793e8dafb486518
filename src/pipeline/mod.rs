//! Pipeline module - load, filter and shape the data behind each chart

pub mod filter;
pub mod graph;
pub mod heatmap;
pub mod histogram;
pub mod loader;

pub use filter::*;
pub use graph::*;
pub use heatmap::*;
pub use histogram::*;
pub use loader::*;
