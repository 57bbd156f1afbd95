use crate::error::GrowthError;
use crate::models::{GrowthParameters, GrowthPoint, GrowthSeries};

/// Generate the exponential growth series N(t) = N0 * e^(r*t) for t in 0..=t_max.
///
/// Fails with [`GrowthError::InvalidArgument`] when `n0` or `r` is not finite
/// or `t_max` is negative. Overflow to infinity is not an error; it is carried
/// into the series unchanged.
///
/// # Examples
///
/// ```
/// use population_growth::analysis::generate;
///
/// let series = generate(100.0, -0.1, 3).unwrap();
/// assert_eq!(series.len(), 4);
/// assert_eq!(format!("{:.3}", series.points()[3].n), "74.082");
/// ```
pub fn generate(n0: f64, r: f64, t_max: i64) -> Result<GrowthSeries, GrowthError> {
    let params = GrowthParameters::new(n0, r, t_max)?;
    Ok(generate_series(&params))
}

/// Generate the series for already-validated parameters.
pub fn generate_series(params: &GrowthParameters) -> GrowthSeries {
    let (n0, r) = (params.n0(), params.r());

    let points: Vec<GrowthPoint> = (0..=params.t_max())
        .map(|t| GrowthPoint {
            t,
            n: n0 * (r * t as f64).exp(),
        })
        .collect();

    let series = GrowthSeries::from_points(points);
    tracing::debug!(n0, r, t_max = params.t_max(), len = series.len(), "generated growth series");
    if series.has_non_finite() {
        tracing::warn!(n0, r, t_max = params.t_max(), "growth series overflowed to a non-finite value");
    }
    series
}

/// The growth-series component: a pure function of its parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthSeriesGenerator;

impl GrowthSeriesGenerator {
    pub fn new() -> Self {
        Self
    }

    /// See [`generate`].
    pub fn generate(&self, n0: f64, r: f64, t_max: i64) -> Result<GrowthSeries, GrowthError> {
        generate(n0, r, t_max)
    }
}
