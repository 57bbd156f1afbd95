mod bounds;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

pub use bounds::{BoundsPreset, InputBounds, ParameterRange};

/// Size of the text chart in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Plot columns, excluding the axis labels
    pub width: usize,
    /// Plot rows
    pub height: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 60,
            height: 16,
        }
    }
}

/// Dashboard configuration, usually read from a TOML file.
///
/// ```toml
/// preset = "extended"
///
/// [chart]
/// width = 80
/// height = 20
/// ```
///
/// An explicit `[bounds]` table (with `n0`, `r`, and `t_max` ranges) takes
/// precedence over `preset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub preset: BoundsPreset,
    pub bounds: Option<InputBounds>,
    pub chart: ChartOptions,
}

impl DashboardConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GrowthError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), preset = %config.preset, "loaded dashboard config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, GrowthError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GrowthError> {
        self.input_bounds().validate()?;
        if self.chart.width < 2 || self.chart.height < 2 {
            return Err(GrowthError::Config(format!(
                "chart must be at least 2x2 cells, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }

    /// The bounds in effect: explicit bounds if given, else the preset's.
    pub fn input_bounds(&self) -> InputBounds {
        self.bounds.unwrap_or_else(|| self.preset.bounds())
    }
}
