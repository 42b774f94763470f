//! Demo configuration. Defaults mirror the lecture notebooks.
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use crate::transforms::{TimeGrid, TransformResult};
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}
impl Default for GridConfig {
    fn default() -> Self {
        // parity examples run on linspace(-5, 5, 1000)
        Self {
            start: -5.0,
            end: 5.0,
            samples: 1000,
        }
    }
}
impl GridConfig {
    pub fn build(&self) -> TransformResult<TimeGrid> {
        TimeGrid::linspace(self.start, self.end, self.samples)
    }
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Grid for the parity and reflection demonstrations.
    pub grid: GridConfig,
    /// Grid for the shift demonstration.
    pub shift_grid: GridConfig,
    pub frequency_hz: f64,
    /// Offset `t0` in `x(t - t0)`.
    pub shift_offset: f64,
    pub scale_factor: f64,
    /// Length of the random signal split into even and odd parts.
    pub decomposition_samples: usize,
    pub seed: u64,
    pub tolerance: f64,
    /// Render PNG plots in memory and report their sizes.
    pub render_plots: bool,
}
impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            shift_grid: GridConfig {
                start: -20.0,
                end: 20.0,
                samples: 50,
            },
            frequency_hz: 0.25,
            shift_offset: -5.0,
            scale_factor: 2.0,
            decomposition_samples: 20,
            seed: 7,
            tolerance: 1e-9,
            render_plots: false,
        }
    }
}
impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DemoConfig =
            serde_json::from_str(json).context("failed to parse demo configuration")?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<()> {
        for (name, grid) in [("grid", &self.grid), ("shift_grid", &self.shift_grid)] {
            if grid.samples < 2 {
                bail!("{name}: need at least 2 samples, got {}", grid.samples);
            }
            if !(grid.end > grid.start) {
                bail!("{name}: end ({}) must be greater than start ({})", grid.end, grid.start);
            }
        }
        let grid = self.grid.build().context("grid: invalid time grid")?;
        if !grid.is_symmetric_about_zero() {
            bail!(
                "grid: parity demos need a grid symmetric about zero, got [{}, {}]",
                self.grid.start,
                self.grid.end
            );
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            bail!("scale_factor must be positive, got {}", self.scale_factor);
        }
        if !self.shift_offset.is_finite() {
            bail!("shift_offset must be finite, got {}", self.shift_offset);
        }
        if !(self.tolerance > 0.0) {
            bail!("tolerance must be positive, got {}", self.tolerance);
        }
        if self.decomposition_samples < 2 {
            bail!(
                "decomposition_samples must be at least 2, got {}",
                self.decomposition_samples
            );
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_validate_and_round_trip() {
        let config = DemoConfig::default();
        config.validate().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DemoConfig::from_json_str(&json).unwrap(), config);
    }
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = DemoConfig::from_json_str(r#"{ "scale_factor": 0.5, "grid": { "samples": 21 } }"#)
            .unwrap();
        assert_eq!(config.scale_factor, 0.5);
        assert_eq!(config.grid.samples, 21);
        assert_eq!(config.grid.start, -5.0);
        assert_eq!(config.shift_offset, -5.0);
        let shifted_grid =
            DemoConfig::from_json_str(r#"{ "shift_grid": { "start": 0.0, "end": 10.0 } }"#).unwrap();
        assert_eq!(shifted_grid.shift_grid.start, 0.0);
    }
    #[test]
    fn invalid_values_are_rejected() {
        assert!(DemoConfig::from_json_str(r#"{ "scale_factor": 0.0 }"#).is_err());
        assert!(DemoConfig::from_json_str(r#"{ "scale_factor": -2.0 }"#).is_err());
        assert!(DemoConfig::from_json_str(r#"{ "grid": { "samples": 1 } }"#).is_err());
        assert!(DemoConfig::from_json_str(r#"{ "shift_grid": { "start": 1.0, "end": 1.0 } }"#).is_err());
        assert!(DemoConfig::from_json_str(r#"{ "tolerance": 0.0 }"#).is_err());
        let err = DemoConfig::from_json_str(r#"{ "grid": { "start": 0.0, "end": 10.0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("symmetric"));
        assert!(DemoConfig::from_json_str("not json").is_err());
    }
    #[test]
    fn grid_config_builds_linspace() {
        let grid = DemoConfig::default().shift_grid.build().unwrap();
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.first(), Some(-20.0));
        assert_eq!(grid.last(), Some(20.0));
    }
}
