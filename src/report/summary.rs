//! Run summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::utils::format_duration;

/// What the pipeline loaded, kept and wrote
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub countries: usize,
    pub languages: usize,
    pub edges: usize,
    pub heatmap_shape: (usize, usize),
    pub top_languages: Vec<(String, f64)>,
    pub outputs: Vec<PathBuf>,
    pub timings: Vec<(String, Duration)>,
}

impl RunSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            ..Default::default()
        }
    }

    pub fn set_filtered(&mut self, rows_kept: usize) {
        self.rows_kept = rows_kept;
    }

    pub fn set_graph(&mut self, countries: usize, languages: usize, edges: usize) {
        self.countries = countries;
        self.languages = languages;
        self.edges = edges;
    }

    pub fn set_heatmap(&mut self, shape: (usize, usize), top_languages: Vec<(String, f64)>) {
        self.heatmap_shape = shape;
        self.top_languages = top_languages;
    }

    pub fn add_output(&mut self, path: PathBuf) {
        self.outputs.push(path);
    }

    pub fn add_timing(&mut self, step: &str, elapsed: Duration) {
        self.timings.push((step.to_string(), elapsed));
    }

    pub fn total_time(&self) -> Duration {
        self.timings.iter().map(|(_, d)| *d).sum()
    }

    /// Share of loaded rows that passed the percent filter, in percent
    pub fn kept_pct(&self) -> f64 {
        if self.rows_loaded > 0 {
            self.rows_kept as f64 / self.rows_loaded as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows Loaded"), Cell::new(self.rows_loaded)]);
        table.add_row(vec![
            Cell::new("🔎 Rows Kept"),
            Cell::new(format!("{} ({:.1}%)", self.rows_kept, self.kept_pct())).fg(
                if self.rows_kept == 0 {
                    Color::Red
                } else {
                    Color::Green
                },
            ),
        ]);
        table.add_row(vec![Cell::new("🌍 Countries"), Cell::new(self.countries)]);
        table.add_row(vec![Cell::new("🗣️  Languages"), Cell::new(self.languages)]);
        table.add_row(vec![
            Cell::new("🔗 Edges"),
            Cell::new(self.edges)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🟩 Heatmap"),
            Cell::new(format!(
                "{} languages x {} countries",
                self.heatmap_shape.0, self.heatmap_shape.1
            )),
        ]);
        for (step, elapsed) in &self.timings {
            table.add_row(vec![
                Cell::new(format!("⏱  {}", step)),
                Cell::new(format_duration(*elapsed)),
            ]);
        }
        table.add_row(vec![
            Cell::new("⏱  Total"),
            Cell::new(format_duration(self.total_time())).add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.top_languages.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("🏆").cyan(),
                style("TOP LANGUAGES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for (rank, (language, total)) in self.top_languages.iter().take(5).enumerate() {
                println!(
                    "      {} {} {}",
                    style(format!("{:>2}.", rank + 1)).dim(),
                    language,
                    style(format!("(Σ {:.1})", total)).dim()
                );
            }
        }

        if !self.outputs.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("💾").cyan(),
                style("WRITTEN FILES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for path in &self.outputs {
                println!("        {} {}", style("•").dim(), path.display());
            }
        }
    }
}
