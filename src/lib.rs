pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{generate, GrowthAnalyzer, GrowthSeriesGenerator, SeriesSummary};
pub use config::{DashboardConfig, InputBounds};
pub use error::GrowthError;
pub use io::SeriesWriter;
pub use models::{GrowthParameters, GrowthPoint, GrowthSeries, Trend};
