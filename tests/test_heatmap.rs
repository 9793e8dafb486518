//! Tests for the language x country heatmap pivot

use lingomap::pipeline::{
    build_heatmap, language_totals, pivot_heatmap, HeatmapMatrix, DEFAULT_TOP_LANGUAGES,
};
use polars::prelude::*;
use std::collections::{BTreeSet, HashMap};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_heatmap_uses_unfiltered_rows() {
    let df = common::create_language_dataframe();

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert_eq!(matrix.languages(), &["English", "French", "Spanish"]);
    assert_eq!(matrix.countries(), &["CA", "MX", "US"]);
    // rows below the 5% graph threshold still contribute
    assert_eq!(matrix.value("French", "US"), Some(2.0));
    assert_eq!(matrix.value("English", "MX"), Some(4.5));
    assert_eq!(matrix.value("Spanish", "CA"), Some(5.0));
}

#[test]
fn test_missing_pairs_are_filled_with_zero() {
    let df = common::create_language_dataframe();

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert_eq!(matrix.value("French", "MX"), Some(0.0));
    assert_eq!(matrix.shape(), (3, 3));
}

#[test]
fn test_duplicate_pairs_are_averaged() {
    let df = df! {
        "country" => ["BE", "BE", "BE"],
        "language" => ["French", "French", "Dutch"],
        "percent" => [40.0f64, 38.0, 59.0],
    }
    .unwrap();

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert_eq!(matrix.value("French", "BE"), Some(39.0));
    assert_eq!(matrix.value("Dutch", "BE"), Some(59.0));
}

#[test]
fn test_language_totals_rank_by_sum() {
    let df = common::create_language_dataframe();

    let totals = language_totals(&df).unwrap();

    assert_eq!(
        totals,
        vec![
            ("English".to_string(), 169.5),
            ("Spanish".to_string(), 111.0),
            ("French".to_string(), 24.0),
        ]
    );
}

#[test]
fn test_language_totals_ties_keep_first_appearance() {
    let df = df! {
        "country" => ["A", "A", "B", "B"],
        "language" => ["Zulu", "Afrikaans", "Xhosa", "Zulu"],
        "percent" => [10.0f64, 20.0, 20.0, 10.0],
    }
    .unwrap();

    let totals = language_totals(&df).unwrap();
    let order: Vec<&str> = totals.iter().map(|(l, _)| l.as_str()).collect();

    assert_eq!(order, vec!["Zulu", "Afrikaans", "Xhosa"]);
}

#[test]
fn test_top_n_limits_rows_but_not_columns() {
    let df = common::create_language_dataframe();

    let matrix = build_heatmap(&df, 1).unwrap();

    assert_eq!(matrix.languages(), &["English"]);
    assert_eq!(matrix.column_count(), 3, "Every country keeps a column");
    assert_eq!(matrix.row(0), Some(&[75.0, 4.5, 90.0][..]));
}

#[test]
fn test_at_most_top_n_rows_on_large_table() {
    let df = common::create_large_language_dataframe(40, 60);

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    let country_count = df
        .column("country")
        .unwrap()
        .as_materialized_series()
        .n_unique()
        .unwrap();
    assert!(matrix.row_count() <= DEFAULT_TOP_LANGUAGES);
    assert_eq!(matrix.column_count(), country_count);
}

#[test]
fn test_null_percent_rows_do_not_create_cells() {
    let df = df! {
        "country" => ["US", "FR"],
        "language" => ["English", "French"],
        "percent" => [Some(90.0f64), None],
    }
    .unwrap();

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert_eq!(matrix.languages(), &["English"]);
    assert_eq!(matrix.countries(), &["US"]);
}

#[test]
fn test_empty_table_gives_empty_matrix() {
    let df = df! {
        "country" => Vec::<String>::new(),
        "language" => Vec::<String>::new(),
        "percent" => Vec::<f64>::new(),
    }
    .unwrap();

    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert!(matrix.is_empty());
    assert_eq!(matrix.value_range(), None);
}

#[test]
fn test_matrix_from_cells_and_range() {
    let mut cells = HashMap::new();
    cells.insert(("English".to_string(), "US".to_string()), 90.0);
    cells.insert(("Spanish".to_string(), "MX".to_string()), 93.0);

    let matrix = HeatmapMatrix::from_cells(
        vec!["English".to_string(), "Spanish".to_string()],
        vec!["MX".to_string(), "US".to_string()],
        &cells,
    );

    assert_eq!(matrix.get(0, 0), Some(0.0));
    assert_eq!(matrix.get(0, 1), Some(90.0));
    assert_eq!(matrix.get(1, 0), Some(93.0));
    assert_eq!(matrix.get(2, 0), None);
    assert_eq!(matrix.value_range(), Some((0.0, 93.0)));
}

/// 40 languages spoken in two countries; `lang_NN` sums to `2 * (NN + 1)`
fn forty_language_dataframe() -> DataFrame {
    let mut countries = Vec::new();
    let mut languages = Vec::new();
    let mut percents = Vec::new();
    for i in 0..40 {
        for country in ["AA", "BB"] {
            countries.push(country.to_string());
            languages.push(format!("lang_{:02}", i));
            percents.push((i + 1) as f64);
        }
    }
    df! {
        "country" => countries,
        "language" => languages,
        "percent" => percents,
    }
    .unwrap()
}

#[test]
fn test_exactly_top_n_rows_when_more_languages_exist() {
    let df = forty_language_dataframe();

    let totals = language_totals(&df).unwrap();
    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    let expected: BTreeSet<String> = totals
        .iter()
        .take(DEFAULT_TOP_LANGUAGES)
        .map(|(language, _)| language.clone())
        .collect();
    let rows: BTreeSet<String> = matrix.languages().iter().cloned().collect();

    assert_eq!(matrix.row_count(), 30);
    assert_eq!(matrix.column_count(), 2);
    assert_eq!(totals[0], ("lang_39".to_string(), 80.0));
    assert_eq!(totals[29], ("lang_10".to_string(), 22.0));
    assert_eq!(rows, expected);
    assert!(!rows.contains("lang_09"), "Lowest totals are dropped");
    assert_eq!(matrix.value("lang_10", "AA"), Some(11.0));
}

#[test]
fn test_pivot_with_precomputed_totals_matches_build() {
    let df = forty_language_dataframe();
    let totals = language_totals(&df).unwrap();

    let pivoted = pivot_heatmap(&df, &totals, 12).unwrap();

    assert_eq!(pivoted, build_heatmap(&df, 12).unwrap());
    assert_eq!(pivoted.row_count(), 12);
}

#[test]
fn test_nan_percent_is_treated_as_missing() {
    let df = df! {
        "country" => ["US", "US", "CA", "CA"],
        "language" => ["English", "Spanish", "Spanish", "Spanish"],
        "percent" => [90.0f64, f64::NAN, 20.0, 10.0],
    }
    .unwrap();

    let totals = language_totals(&df).unwrap();
    let matrix = build_heatmap(&df, DEFAULT_TOP_LANGUAGES).unwrap();

    assert_eq!(
        totals,
        vec![("English".to_string(), 90.0), ("Spanish".to_string(), 30.0)]
    );
    assert_eq!(matrix.value("Spanish", "CA"), Some(15.0));
    assert_eq!(matrix.value("Spanish", "US"), Some(0.0));
    assert_eq!(matrix.value_range(), Some((0.0, 90.0)));
}

#[test]
fn test_totals_rank_many_languages_with_nan_rows() {
    let mut df = forty_language_dataframe();
    let extra = df! {
        "country" => ["AA"],
        "language" => ["lang_00"],
        "percent" => [f64::NAN],
    }
    .unwrap();
    df.vstack_mut(&extra).unwrap();

    let totals = language_totals(&df).unwrap();

    assert_eq!(totals.len(), 40);
    assert!(totals.iter().all(|(_, total)| total.is_finite()));
    assert!(totals.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(totals[39], ("lang_00".to_string(), 2.0));
}
