//! Configuration management for the emotion recognition pipeline

use crate::classifier::{AbsoluteThresholds, DeltaThresholds};
use crate::constants::{DEFAULT_CALIBRATION_FRAMES, DEFAULT_SMOOTHING_ALPHA};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Temporal smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Baseline calibration configuration
    pub calibration: CalibrationConfig,

    /// Classifier threshold tables
    pub classifier: ClassifierConfig,
}

/// Temporal smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Exponential blend factor in (0, 1]; smaller = heavier smoothing
    pub alpha: f64,
}

/// Baseline calibration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Run a calibration phase at session start
    pub enabled: bool,

    /// Number of frames collected before the baseline is computed
    pub num_frames: usize,
}

/// Classifier threshold tables, absolute and delta mode
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Thresholds applied to raw signal values (no baseline)
    pub absolute: AbsoluteThresholds,

    /// Thresholds applied to baseline-relative deltas
    pub delta: DeltaThresholds,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_frames: DEFAULT_CALIBRATION_FRAMES,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing.alpha > 0.0 && self.smoothing.alpha <= 1.0) {
            return Err(Error::ConfigError(
                "Smoothing alpha must be in (0, 1]".to_string(),
            ));
        }
        if self.calibration.num_frames == 0 {
            return Err(Error::ConfigError(
                "Calibration frame count must be greater than 0".to_string(),
            ));
        }

        let a = &self.classifier.absolute;
        if a.ear_low >= a.ear_high {
            return Err(Error::ConfigError(
                "Absolute EAR low threshold must be below the high threshold".to_string(),
            ));
        }
        if !(a.mar_low <= a.mar_moderate && a.mar_moderate <= a.mar_high) {
            return Err(Error::ConfigError(
                "Absolute MAR thresholds must be ordered low <= moderate <= high".to_string(),
            ));
        }
        if a.smile_negative >= a.smile_high {
            return Err(Error::ConfigError(
                "Absolute smile negative threshold must be below the high threshold".to_string(),
            ));
        }

        let d = &self.classifier.delta;
        if d.ear_narrow >= d.ear_widen {
            return Err(Error::ConfigError(
                "Delta EAR narrow threshold must be below the widen threshold".to_string(),
            ));
        }
        if !(d.smile_frown < d.smile_sad && d.smile_sad < d.smile_raise) {
            return Err(Error::ConfigError(
                "Delta smile thresholds must be ordered frown < sad < raise".to_string(),
            ));
        }
        if d.brow_furrow >= 0.0 {
            return Err(Error::ConfigError(
                "Delta brow furrow threshold must be negative".to_string(),
            ));
        }
        if d.mar_floor >= d.mar_open {
            return Err(Error::ConfigError(
                "Delta MAR floor must be below the open threshold".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Facial Emotion Recognition Configuration

# Temporal smoothing
smoothing:
  alpha: 0.3

# Baseline calibration
calibration:
  enabled: true
  num_frames: 90

# Classifier thresholds
classifier:
  # Applied to raw signal values when no baseline exists
  absolute:
    ear_high: 0.30
    ear_low: 0.20
    mar_high: 0.50
    mar_moderate: 0.15
    mar_low: 0.10
    smile_high: 0.005
    smile_negative: -0.005
    mouth_width_smile: 0.45
    brow_dist_low: 0.04

  # Applied to deviations from the calibrated neutral baseline
  delta:
    ear_widen: 0.04
    ear_narrow: -0.04
    mar_open: 0.25
    mar_floor: -0.03
    mar_closed: 0.05
    smile_raise: 0.01
    smile_frown: -0.008
    smile_sad: -0.004
    mouth_width_smile: 0.04
    brow_furrow: -0.015
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses_and_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(parsed.validate().is_ok());
        let defaults = Config::default();
        assert!((parsed.smoothing.alpha - defaults.smoothing.alpha).abs() < 1e-12);
        assert_eq!(parsed.calibration.num_frames, defaults.calibration.num_frames);
        assert!(
            (parsed.classifier.absolute.ear_high - defaults.classifier.absolute.ear_high).abs()
                < 1e-12
        );
        assert!(
            (parsed.classifier.delta.brow_furrow - defaults.classifier.delta.brow_furrow).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = serde_yaml::from_str("smoothing:\n  alpha: 0.5\n").unwrap();
        assert!((parsed.smoothing.alpha - 0.5).abs() < 1e-12);
        assert_eq!(parsed.calibration.num_frames, DEFAULT_CALIBRATION_FRAMES);
        assert!(parsed.calibration.enabled);
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let mut config = Config::default();
        config.smoothing.alpha = 0.0;
        assert!(config.validate().is_err());
        config.smoothing.alpha = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = Config::default();
        config.classifier.absolute.ear_low = 0.4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.classifier.delta.smile_frown = 0.02;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_calibration_frames_rejected() {
        let mut config = Config::default();
        config.calibration.num_frames = 0;
        assert!(config.validate().is_err());
    }
}
