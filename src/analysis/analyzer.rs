use crate::analysis::{generate_series, SeriesSummary};
use crate::models::{GrowthParameters, GrowthSeries};

/// Unified analysis API over one set of growth parameters.
///
/// Every call recomputes from scratch; nothing is cached between calls.
pub struct GrowthAnalyzer<'a> {
    params: &'a GrowthParameters,
}

impl<'a> GrowthAnalyzer<'a> {
    /// Create a new analyzer for the given parameters.
    pub fn new(params: &'a GrowthParameters) -> Self {
        Self { params }
    }

    /// The parameters this analyzer was built with.
    pub fn parameters(&self) -> &GrowthParameters {
        self.params
    }

    /// Generate the full (t, N) trajectory.
    pub fn series(&self) -> GrowthSeries {
        generate_series(self.params)
    }

    /// Generate the trajectory and summarize it.
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::compute(self.params, &self.series())
    }
}
