//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small language table with known filter, graph and heatmap outcomes
///
/// - `US`: English 90 and Spanish 13 pass the 5% filter, French 2 does not
/// - `CA`: English 75 and French 22 pass, Spanish 5 sits exactly on the threshold
/// - `MX`: Spanish 93 passes, English 4.5 does not
pub fn create_language_dataframe() -> DataFrame {
    df! {
        "country" => ["US", "US", "US", "CA", "CA", "CA", "MX", "MX"],
        "language" => ["English", "Spanish", "French", "English", "French", "Spanish", "Spanish", "English"],
        "percent" => [90.0f64, 13.0, 2.0, 75.0, 22.0, 5.0, 93.0, 4.5],
    }
    .unwrap()
}

/// Synthetic table with `countries` countries each speaking a share of `languages` languages
pub fn create_large_language_dataframe(countries: usize, languages: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut country_col: Vec<String> = Vec::new();
    let mut language_col: Vec<String> = Vec::new();
    let mut percent_col: Vec<f64> = Vec::new();

    for c in 0..countries {
        for l in 0..languages {
            if rng.gen_bool(0.3) {
                country_col.push(format!("Country {}", c));
                language_col.push(format!("Language {}", l));
                percent_col.push(rng.gen_range(0.0..100.0));
            }
        }
    }

    df! {
        "country" => country_col,
        "language" => language_col,
        "percent" => percent_col,
    }
    .unwrap()
}

/// Write raw CSV lines into a fresh temporary directory
pub fn write_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("languages.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("languages.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("languages.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Decode a PNG header and return `(width, height, pixels per meter)`
pub fn read_png_info(path: &Path) -> (u32, u32, Option<u32>) {
    let file = std::fs::File::open(path).unwrap();
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();

    let ppm = info
        .pixel_dims
        .filter(|dims| dims.unit == png::Unit::Meter)
        .map(|dims| dims.xppu);

    (info.width, info.height, ppm)
}

/// Assert that a file exists and starts with the PNG signature
pub fn assert_is_png(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected {} to exist: {}", path.display(), e));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']),
        "{} is not a PNG file",
        path.display()
    );
}
