//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::pipeline::{DEFAULT_BINS, DEFAULT_MIN_PERCENT, DEFAULT_TOP_LANGUAGES};
use crate::render::{BIPARTITE_FILE, DEFAULT_DPI, HEATMAP_FILE, HISTOGRAM_FILE};

/// Input read when no `--input` is given
pub const DEFAULT_INPUT: &str = "spoken_languages_by_country.csv";

/// Upper bound for `--dpi`; the bipartite figure is 30x60 inches
pub const MAX_DPI: u32 = 600;

/// Lingomap - Chart which languages are spoken in which countries
#[derive(Parser, Debug)]
#[command(name = "lingomap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet) with `country`, `language` and `percent` columns
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the three PNG files are written to (created if missing)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Rows must have a percent strictly above this value to become graph edges
    #[arg(long, default_value_t = DEFAULT_MIN_PERCENT, value_parser = validate_percent)]
    pub min_percent: f64,

    /// Number of languages (by summed percent) shown as heatmap rows
    #[arg(long, default_value_t = DEFAULT_TOP_LANGUAGES, value_parser = validate_positive)]
    pub top_languages: usize,

    /// Number of fixed-width bins in the edge weight histogram
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = validate_positive)]
    pub bins: usize,

    /// Resolution of the written PNG files in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = validate_dpi)]
    pub dpi: u32,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value_t = 10000)]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Path of the bipartite graph image
    pub fn bipartite_path(&self) -> PathBuf {
        self.output_dir.join(BIPARTITE_FILE)
    }

    /// Path of the weight histogram image
    pub fn histogram_path(&self) -> PathBuf {
        self.output_dir.join(HISTOGRAM_FILE)
    }

    /// Path of the heatmap image
    pub fn heatmap_path(&self) -> PathBuf {
        self.output_dir.join(HEATMAP_FILE)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

/// Validator for min_percent parameter
fn validate_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=100.0).contains(&value) {
        Err(format!(
            "min_percent must be between 0.0 and 100.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

/// Validator for counts that must be at least one
fn validate_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;

    if value == 0 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

/// Validator for dpi parameter
fn validate_dpi(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid DPI", s))?;

    if !(1..=MAX_DPI).contains(&value) {
        Err(format!("dpi must be between 1 and {}, got {}", MAX_DPI, value))
    } else {
        Ok(value)
    }
}
