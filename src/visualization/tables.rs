use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement,
    Table,
};

use crate::analysis::SeriesSummary;
use crate::config::InputBounds;
use crate::models::GrowthSeries;

/// Format N the way the table shows it: three decimals, non-finite as-is.
pub fn format_population(n: f64) -> String {
    format!("{:.3}", n)
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{:.3}", v)).unwrap_or_else(|| "-".to_string())
}

/// Format the growth series as a two-column table (t, N).
pub fn format_series_table(series: &GrowthSeries) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Table".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["t", "N"]);

    for point in series {
        table.add_row(vec![
            Cell::new(point.t).set_alignment(CellAlignment::Right),
            Cell::new(format_population(point.n)).set_alignment(CellAlignment::Right),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the growth series table.
pub fn print_series_table(series: &GrowthSeries) {
    println!("{}", format_series_table(series));
}

/// Format the model equation and headline figures.
pub fn format_summary_table(summary: &SeriesSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Exponential Growth Model".bold().green()));
    output.push_str(&format!("{}\n", summary.equation().cyan()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Initial population (N0)"),
        Cell::new(format_population(summary.n0)),
    ]);
    table.add_row(vec![
        Cell::new("Growth rate (r)"),
        Cell::new(format!("{}", summary.r)),
    ]);
    table.add_row(vec![
        Cell::new("Time horizon (t_max)"),
        Cell::new(summary.t_max),
    ]);
    table.add_row(vec![
        Cell::new(format!("Final population N({})", summary.t_max)),
        Cell::new(format_population(summary.final_value)),
    ]);
    table.add_row(vec![
        Cell::new("Growth factor"),
        Cell::new(format_optional(summary.growth_factor)),
    ]);
    if let Some(d) = summary.doubling_time {
        table.add_row(vec![Cell::new("Doubling time"), Cell::new(format!("{:.3}", d))]);
    }
    if let Some(h) = summary.half_life {
        table.add_row(vec![Cell::new("Half-life"), Cell::new(format!("{:.3}", h))]);
    }
    table.add_row(vec![Cell::new("Trend"), Cell::new(summary.trend)]);

    output.push_str(&format!("{table}"));
    if summary.overflowed {
        output.push_str(&format!(
            "\n{}",
            "Note: values exceeded floating-point range and are shown as inf/NaN".yellow()
        ));
    }
    output
}

/// Print the model summary table.
pub fn print_summary_table(summary: &SeriesSummary) {
    println!("{}", format_summary_table(summary));
}

/// Format the active input bounds.
pub fn format_bounds_table(bounds: &InputBounds) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Input Bounds".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Parameter", "Min", "Max", "Step", "Default"]);

    let ranges = [
        ("N0 (initial population)", &bounds.n0),
        ("r (growth rate)", &bounds.r),
        ("t_max (time horizon)", &bounds.t_max),
    ];
    for (name, range) in ranges {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(range.min),
            Cell::new(range.max),
            Cell::new(range.step),
            Cell::new(range.default),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the active input bounds.
pub fn print_bounds_table(bounds: &InputBounds) {
    println!("{}", format_bounds_table(bounds));
}
