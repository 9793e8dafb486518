//! Lingomap: Spoken Language Charts CLI
//!
//! Loads a country/language/percent table and writes a bipartite graph, an
//! edge weight histogram and a top-language heatmap as PNG files.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use lingomap::cli::Cli;
use lingomap::pipeline::{
    estimated_memory_mb, filter_by_percent, language_totals, load_language_table, pivot_heatmap,
    BipartiteGraph, WeightHistogram,
};
use lingomap::render::{render_bipartite, render_heatmap, render_weight_histogram};
use lingomap::report::RunSummary;
use lingomap::utils::{
    create_spinner, finish_with_failure, finish_with_success, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        cli.input(),
        &cli.output_dir,
        cli.min_percent,
        cli.top_languages,
        cli.bins,
        cli.dpi,
    );

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            cli.output_dir.display()
        )
    })?;

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let df = with_spinner("Reading language table...", "Dataset loaded", || {
        load_language_table(cli.input(), cli.infer_schema_length)
    })?;

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", df.height());
    println!("      Estimated memory: {:.2} MB", estimated_memory_mb(&df));

    let mut summary = RunSummary::new(df.height());
    let elapsed = step_start.elapsed();
    summary.add_timing("Load", elapsed);
    print_step_time(elapsed);

    // Step 2: Percent filter
    print_step_header(2, "Filter Rows");
    let step_start = Instant::now();
    let filtered = filter_by_percent(&df, cli.min_percent)?;
    print_count(
        "row(s) above the threshold",
        filtered.height(),
        Some(&format!("(>{}%)", cli.min_percent)),
    );
    if filtered.height() == 0 {
        print_info("No rows pass the threshold; the graph and histogram will be empty");
    }
    summary.set_filtered(filtered.height());
    let elapsed = step_start.elapsed();
    summary.add_timing("Filter", elapsed);
    print_step_time(elapsed);

    // Step 3: Bipartite graph
    print_step_header(3, "Bipartite Graph");
    let step_start = Instant::now();
    let graph = BipartiteGraph::from_frame(&filtered)?;
    println!(
        "      {} countries, {} languages, {} edges",
        style(graph.countries().len()).yellow().bold(),
        style(graph.languages().len()).yellow().bold(),
        style(graph.edge_count()).yellow().bold()
    );
    summary.set_graph(
        graph.countries().len(),
        graph.languages().len(),
        graph.edge_count(),
    );

    let path = cli.bipartite_path();
    with_spinner(
        "Drawing bipartite graph...",
        &format!("Saved to {}", path.display()),
        || {
            render_bipartite(&graph, cli.min_percent, &path, cli.dpi)
                .with_context(|| format!("Failed to render {}", path.display()))
        },
    )?;
    summary.add_output(path);
    let elapsed = step_start.elapsed();
    summary.add_timing("Bipartite graph", elapsed);
    print_step_time(elapsed);

    // Step 4: Edge weight histogram
    print_step_header(4, "Weight Distribution");
    let step_start = Instant::now();
    let histogram = WeightHistogram::from_weights(&graph.weights(), cli.bins)?;
    let (lo, hi) = histogram.range();
    println!(
        "      {} weights in {} bins over [{:.1}, {:.1}]",
        style(histogram.total()).yellow().bold(),
        histogram.bin_count(),
        lo,
        hi
    );

    let path = cli.histogram_path();
    with_spinner(
        "Drawing histogram...",
        &format!("Saved to {}", path.display()),
        || {
            render_weight_histogram(&histogram, &path, cli.dpi)
                .with_context(|| format!("Failed to render {}", path.display()))
        },
    )?;
    summary.add_output(path);
    let elapsed = step_start.elapsed();
    summary.add_timing("Histogram", elapsed);
    print_step_time(elapsed);

    // Step 5: Heatmap over the unfiltered table
    print_step_header(5, "Language Heatmap");
    let step_start = Instant::now();
    let mut totals = language_totals(&df)?;
    let matrix = pivot_heatmap(&df, &totals, cli.top_languages)?;
    totals.truncate(cli.top_languages);
    println!(
        "      {} languages x {} countries",
        style(matrix.row_count()).yellow().bold(),
        style(matrix.column_count()).yellow().bold()
    );
    summary.set_heatmap(matrix.shape(), totals);

    let path = cli.heatmap_path();
    with_spinner(
        "Drawing heatmap...",
        &format!("Saved to {}", path.display()),
        || {
            render_heatmap(&matrix, cli.top_languages, &path, cli.dpi)
                .with_context(|| format!("Failed to render {}", path.display()))
        },
    )?;
    summary.add_output(path);
    let elapsed = step_start.elapsed();
    summary.add_timing("Heatmap", elapsed);
    print_step_time(elapsed);

    print_success("All charts written");
    summary.display();
    print_completion();

    Ok(())
}

/// Run `work` behind a spinner that ends with `done` on success or a failure mark otherwise
fn with_spinner<T>(message: &str, done: &str, work: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = create_spinner(message);
    match work() {
        Ok(value) => {
            finish_with_success(&spinner, done);
            Ok(value)
        }
        Err(err) => {
            finish_with_failure(&spinner, "Failed");
            Err(err)
        }
    }
}
