//! Report module - summarizing a charting run

pub mod summary;

pub use summary::*;
