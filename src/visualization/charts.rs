use colored::Colorize;

use crate::config::ChartOptions;
use crate::models::GrowthSeries;

const LABEL_WIDTH: usize = 12;
const POINT: char = '•';
const STROKE: char = '│';
const CLIPPED_HIGH: char = '^';
const CLIPPED_LOW: char = 'v';

/// Vertical range spanned by the finite values of a series, padded when flat.
fn value_range(series: &GrowthSeries) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .map(|p| p.n)
        .filter(|n| n.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), n| {
            (lo.min(n), hi.max(n))
        });

    if lo > hi {
        return (0.0, 1.0);
    }
    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.5 };
        return (lo - pad, hi + pad);
    }
    (lo, hi)
}

/// Value of the line at fractional time `t`, interpolating between samples.
fn sample_at(values: &[f64], t: f64) -> f64 {
    let i = (t.floor() as usize).min(values.len() - 1);
    let j = (i + 1).min(values.len() - 1);
    let frac = t - i as f64;
    let (a, b) = (values[i], values[j]);

    if frac == 0.0 || i == j {
        a
    } else if a.is_finite() && b.is_finite() {
        a + (b - a) * frac
    } else if frac < 0.5 {
        a
    } else {
        b
    }
}

/// Rasterize the series onto a `height` x `width` character grid, row 0 at the top.
pub(crate) fn plot_grid(series: &GrowthSeries, options: &ChartOptions) -> Vec<Vec<char>> {
    let width = options.width.max(2);
    let height = options.height.max(2);
    let mut grid = vec![vec![' '; width]; height];

    let values = series.values();
    if values.is_empty() {
        return grid;
    }

    let (lo, hi) = value_range(series);
    let last_row = height - 1;
    let row_of = |v: f64| -> usize {
        let frac = (hi - v) / (hi - lo);
        ((frac * last_row as f64).round().max(0.0) as usize).min(last_row)
    };

    let t_max = (values.len() - 1) as f64;
    let columns = if values.len() == 1 { 1 } else { width };
    let mut prev_row: Option<usize> = None;

    for col in 0..columns {
        let t = if columns == 1 {
            0.0
        } else {
            col as f64 * t_max / (columns - 1) as f64
        };
        let v = sample_at(&values, t);

        let (row, mark) = if v.is_nan() {
            prev_row = None;
            continue;
        } else if v == f64::INFINITY {
            (0, CLIPPED_HIGH)
        } else if v == f64::NEG_INFINITY {
            (last_row, CLIPPED_LOW)
        } else {
            (row_of(v), POINT)
        };

        if let Some(prev) = prev_row {
            let (top, bottom) = if prev < row { (prev, row) } else { (row, prev) };
            for line in grid.iter_mut().take(bottom).skip(top + 1) {
                line[col] = STROKE;
            }
        }
        grid[row][col] = mark;
        prev_row = Some(row);
    }

    grid
}

fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1e6 {
        format!("{:.3e}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Format a text line chart of N against t.
pub fn format_line_chart(series: &GrowthSeries, options: &ChartOptions) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Over Time".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(LABEL_WIDTH + 2 + options.width)));

    if series.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let grid = plot_grid(series, options);
    let (lo, hi) = value_range(series);
    let last_row = grid.len() - 1;
    let mid_row = last_row / 2;
    let width = grid[0].len();

    output.push_str(&format!("{:>w$}\n", "N (population)", w = LABEL_WIDTH));

    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            Some(hi)
        } else if row == last_row {
            Some(lo)
        } else if row == mid_row {
            Some(hi - (hi - lo) * row as f64 / last_row as f64)
        } else {
            None
        };
        let line: String = cells.iter().collect();
        match label {
            Some(v) => output.push_str(&format!(
                "{:>w$} ┤{}\n",
                format_axis_value(v),
                line.green(),
                w = LABEL_WIDTH
            )),
            None => output.push_str(&format!("{:>w$} │{}\n", "", line.green(), w = LABEL_WIDTH)),
        }
    }

    output.push_str(&format!("{:>w$} └{}\n", "", "─".repeat(width), w = LABEL_WIDTH));

    let right = series.t_max().unwrap_or(0).to_string();
    if series.len() > 1 {
        let gap = width.saturating_sub(1 + right.len());
        output.push_str(&format!(
            "{:>w$}  0{}{}\n",
            "",
            " ".repeat(gap),
            right,
            w = LABEL_WIDTH
        ));
    } else {
        output.push_str(&format!("{:>w$}  0\n", "", w = LABEL_WIDTH));
    }
    output.push_str(&format!("{:>w$}\n", "t (time)", w = LABEL_WIDTH + 2 + width));

    if series.has_non_finite() {
        output.push_str(&format!(
            "  {}\n",
            "^ marks values clipped at +inf, v marks -inf, gaps mark NaN".dimmed()
        ));
    }

    output
}

/// Print a text line chart of N against t.
pub fn print_line_chart(series: &GrowthSeries, options: &ChartOptions) {
    print!("{}", format_line_chart(series, options));
}
