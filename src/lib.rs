//! Lingomap: Spoken Language Charts
//!
//! A library for turning a table of (country, language, percent) rows into a
//! bipartite country/language graph, an edge weight histogram and a
//! language x country heatmap, each written as a PNG file.

pub mod cli;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod utils;
