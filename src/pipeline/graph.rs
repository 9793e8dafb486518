//! Country/language bipartite graph
//!
//! Countries and languages live in separate node lists and an edge always stores
//! one index into each, so an edge between two countries (or two languages)
//! cannot be represented. A country and a language sharing a label remain two
//! distinct nodes.

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::DataFrame;

use super::loader::{language_records, LanguageRecord};

/// Vertical distance between neighbouring nodes in a column
pub const DEFAULT_Y_GAP: f64 = 1.5;

/// Horizontal position of the country column
pub const COUNTRY_COLUMN_X: f64 = -1.0;

/// Horizontal position of the language column
pub const LANGUAGE_COLUMN_X: f64 = 1.0;

/// Edge between `countries[country]` and `languages[language]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub country: usize,
    pub language: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    countries: Vec<String>,
    languages: Vec<String>,
    edges: Vec<WeightedEdge>,
    country_index: HashMap<String, usize>,
    language_index: HashMap<String, usize>,
    edge_index: HashMap<(usize, usize), usize>,
}

/// Node positions for a two-column drawing, indexed like the graph's node lists
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub countries: Vec<(f64, f64)>,
    pub languages: Vec<(f64, f64)>,
}

impl ColumnLayout {
    /// Largest y coordinate used by either column (0.0 for an empty layout)
    pub fn max_y(&self) -> f64 {
        self.countries
            .iter()
            .chain(self.languages.iter())
            .map(|&(_, y)| y)
            .fold(0.0, f64::max)
    }
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph with one edge per (country, language) pair.
    ///
    /// Nodes keep first-appearance order. A repeated pair keeps its original
    /// edge position and takes the weight of the last record.
    pub fn from_records(records: &[LanguageRecord]) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.add_edge(&record.country, &record.language, record.percent);
        }
        graph
    }

    /// Build a graph from every row of a normalized language table
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let records = language_records(df)?;
        Ok(Self::from_records(&records))
    }

    pub fn add_edge(&mut self, country: &str, language: &str, weight: f64) {
        let c = intern(&mut self.countries, &mut self.country_index, country);
        let l = intern(&mut self.languages, &mut self.language_index, language);

        match self.edge_index.get(&(c, l)) {
            Some(&idx) => self.edges[idx].weight = weight,
            None => {
                self.edge_index.insert((c, l), self.edges.len());
                self.edges.push(WeightedEdge {
                    country: c,
                    language: l,
                    weight,
                });
            }
        }
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.countries.len() + self.languages.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Weight of the edge between a country and a language, if present
    pub fn weight(&self, country: &str, language: &str) -> Option<f64> {
        let c = self.country_index.get(country)?;
        let l = self.language_index.get(language)?;
        self.edge_index.get(&(*c, *l)).map(|&idx| self.edges[idx].weight)
    }

    /// Edge weights in edge order
    pub fn weights(&self) -> Vec<f64> {
        self.edges.iter().map(|e| e.weight).collect()
    }

    /// Labels of the two endpoints of an edge
    pub fn endpoints(&self, edge: &WeightedEdge) -> (&str, &str) {
        (&self.countries[edge.country], &self.languages[edge.language])
    }

    /// Place countries at x = -1 and languages at x = 1.
    ///
    /// Within a column, nodes are ranked by label and the node with rank `i`
    /// sits at `y = i * y_gap`.
    pub fn column_layout(&self, y_gap: f64) -> ColumnLayout {
        ColumnLayout {
            countries: column_positions(&self.countries, COUNTRY_COLUMN_X, y_gap),
            languages: column_positions(&self.languages, LANGUAGE_COLUMN_X, y_gap),
        }
    }
}

fn intern(labels: &mut Vec<String>, index: &mut HashMap<String, usize>, label: &str) -> usize {
    if let Some(&idx) = index.get(label) {
        return idx;
    }
    let idx = labels.len();
    labels.push(label.to_string());
    index.insert(label.to_string(), idx);
    idx
}

fn column_positions(labels: &[String], x: f64, y_gap: f64) -> Vec<(f64, f64)> {
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| labels[a].cmp(&labels[b]));

    let mut positions = vec![(x, 0.0); labels.len()];
    for (rank, idx) in order.into_iter().enumerate() {
        positions[idx] = (x, rank as f64 * y_gap);
    }
    positions
}
