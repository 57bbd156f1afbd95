use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Inputs to the exponential growth model N(t) = N0 * e^(r*t).
///
/// Construction validates finiteness and the integer horizon; once built the
/// parameters are immutable. Range limits (e.g. N0 in 0..=1000) are input
/// policy and live in [`crate::config::InputBounds`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrowthParameters")]
pub struct GrowthParameters {
    n0: f64,
    r: f64,
    t_max: u32,
}

/// Unvalidated wire form; `t_max` arrives as a JSON number.
#[derive(Debug, Deserialize)]
struct RawGrowthParameters {
    n0: f64,
    r: f64,
    t_max: f64,
}

impl TryFrom<RawGrowthParameters> for GrowthParameters {
    type Error = GrowthError;

    fn try_from(raw: RawGrowthParameters) -> Result<Self, Self::Error> {
        GrowthParameters::from_real(raw.n0, raw.r, raw.t_max)
    }
}

impl GrowthParameters {
    /// Build parameters from an integer horizon.
    ///
    /// # Examples
    ///
    /// ```
    /// use population_growth::GrowthParameters;
    ///
    /// let params = GrowthParameters::new(100.0, 0.2, 5).unwrap();
    /// assert_eq!(params.t_max(), 5);
    /// assert!(GrowthParameters::new(100.0, 0.2, -1).is_err());
    /// assert!(GrowthParameters::new(f64::NAN, 0.2, 5).is_err());
    /// ```
    pub fn new(n0: f64, r: f64, t_max: i64) -> Result<Self, GrowthError> {
        check_finite("N0", n0)?;
        check_finite("r", r)?;
        if t_max < 0 {
            return Err(GrowthError::InvalidArgument(format!(
                "t_max must be non-negative, got {t_max}"
            )));
        }
        let t_max = u32::try_from(t_max).map_err(|_| {
            GrowthError::InvalidArgument(format!(
                "t_max must not exceed {}, got {t_max}",
                u32::MAX
            ))
        })?;
        Ok(Self { n0, r, t_max })
    }

    /// Build parameters from a real-valued horizon, rejecting fractional values.
    pub fn from_real(n0: f64, r: f64, t_max: f64) -> Result<Self, GrowthError> {
        if !t_max.is_finite() || t_max.fract() != 0.0 {
            return Err(GrowthError::InvalidArgument(format!(
                "t_max must be a whole number, got {t_max}"
            )));
        }
        if t_max > u32::MAX as f64 {
            return Err(GrowthError::InvalidArgument(format!(
                "t_max must not exceed {}, got {t_max}",
                u32::MAX
            )));
        }
        // Negative values fall through to `new`'s check.
        Self::new(n0, r, t_max as i64)
    }

    /// Initial population N0.
    pub fn n0(&self) -> f64 {
        self.n0
    }

    /// Intrinsic growth rate r.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Last time step included in the series.
    pub fn t_max(&self) -> u32 {
        self.t_max
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), GrowthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GrowthError::InvalidArgument(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}
