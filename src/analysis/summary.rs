use serde::Serialize;

use crate::models::{serialize_population, GrowthParameters, GrowthSeries, Trend};

/// Headline figures for a growth trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub n0: f64,
    pub r: f64,
    pub t_max: u32,
    /// N(t_max)
    #[serde(serialize_with = "serialize_population")]
    pub final_value: f64,
    /// N(t_max) / N0, i.e. e^(r * t_max); `None` when N0 is zero
    pub growth_factor: Option<f64>,
    /// Time for the population to double (r > 0)
    pub doubling_time: Option<f64>,
    /// Time for the population to halve (r < 0)
    pub half_life: Option<f64>,
    pub trend: Trend,
    /// Whether any value overflowed to infinity or NaN
    pub overflowed: bool,
}

impl SeriesSummary {
    /// Summarize a series produced from `params`.
    pub fn compute(params: &GrowthParameters, series: &GrowthSeries) -> Self {
        let (n0, r) = (params.n0(), params.r());
        let final_value = series.last().map(|p| p.n).unwrap_or(n0);

        let trend = match (n0 * r).partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Greater) => Trend::Increasing,
            Some(std::cmp::Ordering::Less) => Trend::Decreasing,
            _ => Trend::Constant,
        };

        let growth_factor = if n0 != 0.0 {
            Some((r * params.t_max() as f64).exp())
        } else {
            None
        };

        let ln2 = std::f64::consts::LN_2;
        let (doubling_time, half_life) = if n0 == 0.0 {
            (None, None)
        } else if r > 0.0 {
            (Some(ln2 / r), None)
        } else if r < 0.0 {
            (None, Some(ln2 / -r))
        } else {
            (None, None)
        };

        Self {
            n0,
            r,
            t_max: params.t_max(),
            final_value,
            growth_factor,
            doubling_time,
            half_life,
            trend,
            overflowed: series.has_non_finite(),
        }
    }

    /// The model equation with the parameters substituted, e.g. `N(t) = 100 * e^(0.2 * t)`.
    pub fn equation(&self) -> String {
        format!("N(t) = {} * e^({} * t)", self.n0, self.r)
    }
}
