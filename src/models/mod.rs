mod parameters;
mod series;

pub use parameters::GrowthParameters;
pub(crate) use series::serialize_population;
pub use series::{GrowthPoint, GrowthSeries, Trend};
