mod charts;
mod tables;

pub use charts::{format_line_chart, print_line_chart};
pub use tables::{
    format_bounds_table, format_population, format_series_table, format_summary_table,
    print_bounds_table, print_series_table, print_summary_table,
};
