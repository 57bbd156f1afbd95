use crate::config::{DashboardConfig, InputBounds};

/// Shared, read-only server state. Every request recomputes its series, so
/// nothing here changes after startup.
pub struct AppState {
    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn bounds(&self) -> InputBounds {
        self.config.input_bounds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundsPreset;

    #[test]
    fn test_default_state_uses_classic_bounds() {
        assert_eq!(AppState::default().bounds(), InputBounds::classic());
    }

    #[test]
    fn test_state_follows_config_preset() {
        let config = DashboardConfig {
            preset: BoundsPreset::Extended,
            ..DashboardConfig::default()
        };
        assert_eq!(AppState::new(config).bounds(), InputBounds::extended());
    }
}
