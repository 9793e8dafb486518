//! Language x country pivot for the heatmap
//!
//! Aggregation runs on the full, unfiltered table: mean percent per
//! (language, country) pair, missing pairs filled with 0, rows restricted to
//! the languages with the highest summed percent.

use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::Result;
use polars::prelude::*;

use super::loader::{percent_expr, COUNTRY_COLUMN, LANGUAGE_COLUMN, PERCENT_COLUMN};

/// Number of languages kept as heatmap rows
pub const DEFAULT_TOP_LANGUAGES: usize = 30;

/// Dense row-major matrix with languages as rows and countries as columns
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapMatrix {
    languages: Vec<String>,
    countries: Vec<String>,
    values: Vec<f64>,
}

impl HeatmapMatrix {
    /// Rows and columns are sorted by label. Pairs absent from `cells` are 0.
    pub fn from_cells(
        languages: Vec<String>,
        countries: Vec<String>,
        cells: &HashMap<(String, String), f64>,
    ) -> Self {
        let mut values = Vec::with_capacity(languages.len() * countries.len());
        for language in &languages {
            for country in &countries {
                let value = cells
                    .get(&(language.clone(), country.clone()))
                    .copied()
                    .unwrap_or(0.0);
                values.push(value);
            }
        }

        Self {
            languages,
            countries,
            values,
        }
    }

    /// Row labels
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Column labels
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn row_count(&self) -> usize {
        self.languages.len()
    }

    pub fn column_count(&self) -> usize {
        self.countries.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.row_count() || col >= self.column_count() {
            return None;
        }
        Some(self.values[row * self.column_count() + col])
    }

    /// Cell value looked up by labels
    pub fn value(&self, language: &str, country: &str) -> Option<f64> {
        let row = self.languages.iter().position(|l| l == language)?;
        let col = self.countries.iter().position(|c| c == country)?;
        self.get(row, col)
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.row_count() {
            return None;
        }
        let width = self.column_count();
        Some(&self.values[row * width..(row + 1) * width])
    }

    /// `(min, max)` over all cells, `None` for an empty matrix
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        ))
    }
}

/// Summed percent per language, highest first.
///
/// Ties keep the order in which languages first appear in the table. NaN
/// percents count as missing.
pub fn language_totals(df: &DataFrame) -> Result<Vec<(String, f64)>> {
    let totals = df
        .clone()
        .lazy()
        .with_column(percent_expr())
        .group_by_stable([col(LANGUAGE_COLUMN)])
        .agg([col(PERCENT_COLUMN).sum()])
        .collect()?;

    let languages = totals.column(LANGUAGE_COLUMN)?.as_materialized_series().str()?;
    let sums = totals.column(PERCENT_COLUMN)?.as_materialized_series().f64()?;

    let mut ranked: Vec<(String, f64)> = languages
        .into_iter()
        .zip(sums)
        .filter_map(|(language, sum)| Some((language?.to_string(), sum.unwrap_or(0.0))))
        .collect();

    // stable: equal totals stay in first-appearance order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(ranked)
}

/// Pivot the table into a language x country matrix of mean percents,
/// keeping only the `top_n` languages of [`language_totals`].
///
/// Columns hold every country with at least one non-null mean. A top language
/// without any non-null percent has no row.
pub fn build_heatmap(df: &DataFrame, top_n: usize) -> Result<HeatmapMatrix> {
    let totals = language_totals(df)?;
    pivot_heatmap(df, &totals, top_n)
}

/// Like [`build_heatmap`], reusing totals already ranked by [`language_totals`]
pub fn pivot_heatmap(
    df: &DataFrame,
    totals: &[(String, f64)],
    top_n: usize,
) -> Result<HeatmapMatrix> {
    let top: HashSet<&str> = totals
        .iter()
        .take(top_n)
        .map(|(language, _)| language.as_str())
        .collect();

    let means = df
        .clone()
        .lazy()
        .with_column(percent_expr())
        .group_by_stable([col(LANGUAGE_COLUMN), col(COUNTRY_COLUMN)])
        .agg([col(PERCENT_COLUMN).mean()])
        .collect()?;

    let languages = means.column(LANGUAGE_COLUMN)?.as_materialized_series().str()?;
    let countries = means.column(COUNTRY_COLUMN)?.as_materialized_series().str()?;
    let values = means.column(PERCENT_COLUMN)?.as_materialized_series().f64()?;

    let mut rows: BTreeSet<String> = BTreeSet::new();
    let mut columns: BTreeSet<String> = BTreeSet::new();
    let mut cells: HashMap<(String, String), f64> = HashMap::new();

    for ((language, country), mean) in languages.into_iter().zip(countries).zip(values) {
        let (Some(language), Some(country), Some(mean)) = (language, country, mean) else {
            continue;
        };
        columns.insert(country.to_string());
        if top.contains(language) {
            rows.insert(language.to_string());
            cells.insert((language.to_string(), country.to_string()), mean);
        }
    }

    Ok(HeatmapMatrix::from_cells(
        rows.into_iter().collect(),
        columns.into_iter().collect(),
        &cells,
    ))
}
