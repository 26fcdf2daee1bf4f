//! Visualization configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for laying out a replay canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    /// Seed for deterministic layouts
    pub layout_seed: u64,
    /// Multiplier applied to every layout coordinate
    pub layout_scale: f64,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            layout_seed: 42,
            layout_scale: 1.0,
        }
    }
}

impl VisConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: VisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the scale is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.layout_scale.is_finite() || self.layout_scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.layout_scale));
        }
        Ok(())
    }
}
