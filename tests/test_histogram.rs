//! Tests for the edge weight histogram

use lingomap::pipeline::{
    filter_by_percent, load_language_table, BipartiteGraph, WeightHistogram, DEFAULT_BINS,
};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_counts_sum_to_edge_count() {
    let df = common::create_language_dataframe();
    let filtered = filter_by_percent(&df, 5.0).unwrap();
    let graph = BipartiteGraph::from_frame(&filtered).unwrap();

    let histogram = WeightHistogram::from_weights(&graph.weights(), DEFAULT_BINS).unwrap();

    assert_eq!(histogram.bin_count(), 50);
    assert_eq!(histogram.edges().len(), 51);
    assert_eq!(histogram.total(), graph.edge_count());
    assert_eq!(histogram.range(), (13.0, 93.0));
}

#[test]
fn test_maximum_lands_in_last_bin() {
    let histogram = WeightHistogram::from_weights(&[0.0, 5.0, 10.0], 2).unwrap();

    assert_eq!(histogram.counts(), &[1, 2]);
}

#[test]
fn test_bins_are_half_open() {
    let histogram = WeightHistogram::from_weights(&[0.0, 2.5, 5.0, 7.5, 10.0], 4).unwrap();

    assert_eq!(histogram.edges(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(histogram.counts(), &[1, 1, 1, 2]);
    assert_eq!(histogram.max_count(), 2);
}

#[test]
fn test_single_distinct_value_widens_range() {
    let histogram = WeightHistogram::from_weights(&[42.0, 42.0, 42.0], 10).unwrap();

    assert_eq!(histogram.range(), (41.5, 42.5));
    assert_eq!(histogram.total(), 3);
    assert_eq!(histogram.counts()[5], 3, "Value sits in the middle bin");
}

#[test]
fn test_empty_input_has_unit_range() {
    let histogram = WeightHistogram::from_weights(&[], DEFAULT_BINS).unwrap();

    assert_eq!(histogram.range(), (0.0, 1.0));
    assert_eq!(histogram.total(), 0);
    assert_eq!(histogram.max_count(), 0);
    assert_eq!(histogram.bin_count(), DEFAULT_BINS);
}

#[test]
fn test_non_finite_values_are_ignored() {
    let histogram =
        WeightHistogram::from_weights(&[1.0, f64::NAN, 3.0, f64::INFINITY], 2).unwrap();

    assert_eq!(histogram.total(), 2);
    assert_eq!(histogram.range(), (1.0, 3.0));
}

#[test]
fn test_zero_bins_is_an_error() {
    let result = WeightHistogram::from_weights(&[1.0, 2.0], 0);

    assert!(result.is_err());
}

#[test]
fn test_bins_iterator_matches_edges_and_counts() {
    let histogram = WeightHistogram::from_weights(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();

    let bins: Vec<(f64, f64, usize)> = histogram.bins().collect();

    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0].0, 1.0);
    assert_eq!(bins[2].1, 4.0);
    assert_eq!(bins.iter().map(|b| b.2).sum::<usize>(), 4);
    for window in bins.windows(2) {
        assert_eq!(window[0].1, window[1].0, "Adjacent bins share an edge");
    }
}

#[test]
fn test_counts_match_edges_when_input_has_nan() {
    let (_temp_dir, csv_path) = common::write_csv(&[
        "country,language,percent",
        "US,English,90",
        "US,Spanish,NaN",
        "CA,Spanish,20",
    ]);
    let df = load_language_table(&csv_path, 100).unwrap();
    let filtered = filter_by_percent(&df, 5.0).unwrap();
    let graph = BipartiteGraph::from_frame(&filtered).unwrap();

    let histogram = WeightHistogram::from_weights(&graph.weights(), DEFAULT_BINS).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight("US", "Spanish"), None);
    assert_eq!(histogram.total(), graph.edge_count());
}
