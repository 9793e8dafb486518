//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Column holding the country name
pub const COUNTRY_COLUMN: &str = "country";
/// Column holding the language name
pub const LANGUAGE_COLUMN: &str = "language";
/// Column holding the share of the population speaking the language (0-100)
pub const PERCENT_COLUMN: &str = "percent";

/// Columns every input table must provide
pub const REQUIRED_COLUMNS: [&str; 3] = [COUNTRY_COLUMN, LANGUAGE_COLUMN, PERCENT_COLUMN];

/// One (country, language, percent) row of the input table
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRecord {
    pub country: String,
    pub language: String,
    pub percent: f64,
}

impl LanguageRecord {
    pub fn new(country: impl Into<String>, language: impl Into<String>, percent: f64) -> Self {
        Self {
            country: country.into(),
            language: language.into(),
            percent,
        }
    }
}

/// Load a dataset from a file (CSV or Parquet based on extension)
///
/// `infer_schema_length` only applies to CSV; 0 means a full table scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Read only the schema of a dataset and return its column names
pub fn get_column_names(path: &Path, infer_schema_length: usize) -> Result<Vec<String>> {
    let mut lf = load_dataset(path, infer_schema_length)?;
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read schema of {}", path.display()))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Load the language table and normalize it to `country: str, language: str, percent: f64`.
///
/// Extra columns are dropped. Percent values that cannot be parsed as numbers,
/// or that read as NaN, become null.
pub fn load_language_table(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let mut lf = load_dataset(path, infer_schema_length)?;
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read schema of {}", path.display()))?;

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| schema.get(name).is_none())
        .collect();
    if !missing.is_empty() {
        let available: Vec<String> = schema.iter_names().map(|name| name.to_string()).collect();
        anyhow::bail!(
            "Required column(s) {:?} not found in {}. Available columns: {:?}",
            missing,
            path.display(),
            available
        );
    }

    let df = lf
        .select([
            col(COUNTRY_COLUMN).cast(DataType::String),
            col(LANGUAGE_COLUMN).cast(DataType::String),
            percent_expr(),
        ])
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    Ok(df)
}

/// `percent` as Float64 with NaN turned into null, so NaN never passes a filter
/// and never enters a sum or mean
pub fn percent_expr() -> Expr {
    col(PERCENT_COLUMN)
        .cast(DataType::Float64)
        .fill_nan(lit(NULL).cast(DataType::Float64))
}

/// Materialize the rows of a normalized language table, skipping rows with nulls
pub fn language_records(df: &DataFrame) -> Result<Vec<LanguageRecord>> {
    let countries = df.column(COUNTRY_COLUMN)?.as_materialized_series().str()?;
    let languages = df.column(LANGUAGE_COLUMN)?.as_materialized_series().str()?;
    let percents = df.column(PERCENT_COLUMN)?.as_materialized_series().f64()?;

    let records = countries
        .into_iter()
        .zip(languages)
        .zip(percents)
        .filter_map(|((country, language), percent)| {
            Some(LanguageRecord::new(country?, language?, percent?))
        })
        .collect();

    Ok(records)
}

/// Estimated in-memory size of a DataFrame in megabytes
pub fn estimated_memory_mb(df: &DataFrame) -> f64 {
    df.estimated_size() as f64 / (1024.0 * 1024.0)
}
