//! Terminal styling utilities for the run report

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static FILTER: Emoji<'_, '_> = Emoji("🔎 ", "");
pub static CLOCK: Emoji<'_, '_> = Emoji("⏱  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ╦  ╦╔╗╔╔═╗╔═╗╔╦╗╔═╗╔═╗
    ║  ║║║║║ ╦║ ║║║║╠═╣╠═╝
    ╩═╝╩╝╚╝╚═╝╚═╝╩ ╩╩ ╩╩
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Who speaks what, where").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    input: &Path,
    output_dir: &Path,
    min_percent: f64,
    top_languages: usize,
    bins: usize,
    dpi: u32,
) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(input, 38)
    );
    println!(
        "    │  {} Output: {:<39}│",
        SAVE,
        truncate_path(output_dir, 38)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Edge threshold:  {:<30}│",
        FILTER,
        style(format!(">{}%", min_percent)).yellow()
    );
    println!(
        "    │  {} Top languages:   {:<30}│",
        CHART,
        style(top_languages).yellow()
    );
    println!(
        "    │  {} Histogram bins:  {:<30}│",
        CHART,
        style(bins).yellow()
    );
    println!(
        "    │  {} Resolution:      {:<30}│",
        SAVE,
        style(format!("{} DPI", dpi)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}{}",
        CLOCK,
        style(format_duration(elapsed)).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Lingomap charts complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

/// Human readable duration: milliseconds below one second, seconds otherwise
pub fn format_duration(elapsed: Duration) -> String {
    if elapsed.as_secs_f64() < 1.0 {
        format!("{} ms", elapsed.as_millis())
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_string("data.csv", 38), "data.csv");
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let truncated = truncate_string("/very/long/path/to/languages.csv", 16);
        assert_eq!(truncated.chars().count(), 16);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("languages.csv"));
    }

    #[test]
    fn test_truncate_multibyte_labels() {
        let truncated = truncate_string("Côte d’Ivoire – Français", 10);
        assert_eq!(truncated.chars().count(), 10);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250 ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50 s");
    }
}
