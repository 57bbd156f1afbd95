mod analyzer;
mod generator;
mod summary;

pub use analyzer::GrowthAnalyzer;
pub use generator::{generate, generate_series, GrowthSeriesGenerator};
pub use summary::SeriesSummary;
