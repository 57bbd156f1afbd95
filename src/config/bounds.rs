use serde::{Deserialize, Serialize};

use crate::error::GrowthError;
use crate::models::GrowthParameters;

/// Slider limits for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<(), GrowthError> {
        let all_finite = [self.min, self.max, self.step, self.default]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(GrowthError::Config(format!(
                "{name}: range values must be finite"
            )));
        }
        if self.min > self.max {
            return Err(GrowthError::Config(format!(
                "{name}: min ({}) exceeds max ({})",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(GrowthError::Config(format!(
                "{name}: step must be positive, got {}",
                self.step
            )));
        }
        if !self.contains(self.default) {
            return Err(GrowthError::Config(format!(
                "{name}: default {} outside {}..={}",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Named bound sets offered by the input surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPreset {
    /// Non-negative growth over a short horizon
    #[default]
    Classic,
    /// Large populations, decline, and long horizons
    Extended,
}

impl BoundsPreset {
    pub fn bounds(self) -> InputBounds {
        match self {
            BoundsPreset::Classic => InputBounds::classic(),
            BoundsPreset::Extended => InputBounds::extended(),
        }
    }
}

impl std::fmt::Display for BoundsPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsPreset::Classic => write!(f, "classic"),
            BoundsPreset::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for BoundsPreset {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(BoundsPreset::Classic),
            "extended" => Ok(BoundsPreset::Extended),
            _ => Err(GrowthError::Config(format!(
                "Unknown bounds preset: '{s}'. Use classic or extended"
            ))),
        }
    }
}

/// Range limits applied to user input before it reaches the generator.
///
/// These are input policy only. [`crate::analysis::generate`] accepts any
/// finite parameters regardless of what is configured here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub n0: ParameterRange,
    pub r: ParameterRange,
    pub t_max: ParameterRange,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::classic()
    }
}

impl InputBounds {
    pub fn classic() -> Self {
        Self {
            n0: ParameterRange::new(0.0, 1000.0, 10.0, 100.0),
            r: ParameterRange::new(0.0, 1.0, 0.01, 0.2),
            t_max: ParameterRange::new(1.0, 100.0, 1.0, 20.0),
        }
    }

    pub fn extended() -> Self {
        Self {
            n0: ParameterRange::new(0.0, 100_000.0, 10.0, 100.0),
            r: ParameterRange::new(-5.0, 5.0, 0.01, 0.2),
            t_max: ParameterRange::new(1.0, 10_000.0, 1.0, 20.0),
        }
    }

    /// Check that the bounds themselves are coherent.
    pub fn validate(&self) -> Result<(), GrowthError> {
        self.n0.validate("n0")?;
        self.r.validate("r")?;
        self.t_max.validate("t_max")?;

        let t = &self.t_max;
        for (label, value) in [("min", t.min), ("max", t.max), ("default", t.default)] {
            if value < 0.0 || value.fract() != 0.0 {
                return Err(GrowthError::Config(format!(
                    "t_max: {label} must be a whole number >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parameters built from each range's default value.
    pub fn default_parameters(&self) -> Result<GrowthParameters, GrowthError> {
        GrowthParameters::from_real(self.n0.default, self.r.default, self.t_max.default)
    }

    /// Reject parameters that fall outside the configured ranges.
    pub fn check(&self, params: &GrowthParameters) -> Result<(), GrowthError> {
        let checks = [
            ("N0", params.n0(), &self.n0),
            ("r", params.r(), &self.r),
            ("t_max", params.t_max() as f64, &self.t_max),
        ];
        for (name, value, range) in checks {
            if !range.contains(value) {
                return Err(GrowthError::InvalidArgument(format!(
                    "{name} = {value} is outside the allowed range {}..={}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
