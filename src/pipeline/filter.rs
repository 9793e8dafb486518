//! Percent threshold filtering

use anyhow::Result;
use polars::prelude::*;

use super::loader::percent_expr;

/// Rows must exceed this share of speakers to become graph edges
pub const DEFAULT_MIN_PERCENT: f64 = 5.0;

/// Keep rows whose percent is strictly greater than `threshold`.
///
/// Rows with a null or NaN percent never pass.
pub fn filter_by_percent(df: &DataFrame, threshold: f64) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(percent_expr().gt(lit(threshold)))
        .collect()?;

    Ok(filtered)
}
