// src/config/mod.rs
//! Analysis configuration management

pub mod constants;

pub use constants::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Complete analysis configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Z-score threshold for the static-baseline strategy
    #[serde(default = "defaults::static_threshold")]
    pub static_threshold: f32,

    /// Moving-average strategy settings
    #[serde(default)]
    pub moving_average: MovingAverageConfig,

    /// Feature extraction window geometry
    #[serde(default)]
    pub feature_window: FeatureWindowConfig,

    /// Directory holding the per-muscle reference signals
    #[serde(default = "defaults::baseline_dir")]
    pub baseline_dir: PathBuf,
}

/// Moving-average comparator settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MovingAverageConfig {
    /// Centered moving-average window, in samples
    #[serde(default = "defaults::moving_average_window")]
    pub window: usize,

    /// Z-score threshold for this strategy
    #[serde(default = "defaults::moving_average_threshold")]
    pub threshold: f32,
}

/// Feature extraction window geometry
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeatureWindowConfig {
    /// Window length, in samples
    #[serde(default = "defaults::feature_window_len")]
    pub window_len: usize,

    /// Step between consecutive window starts, in samples
    #[serde(default = "defaults::feature_step")]
    pub step: usize,
}

/// Default value providers using constants
mod defaults {
    use std::path::PathBuf;

    use crate::config::constants::{baseline, thresholds, windowing};

    pub fn static_threshold() -> f32 {
        thresholds::STATIC_ANOMALY_THRESHOLD
    }
    pub fn moving_average_window() -> usize {
        windowing::DEFAULT_MOVING_AVERAGE_WINDOW
    }
    pub fn moving_average_threshold() -> f32 {
        thresholds::MOVING_AVERAGE_ANOMALY_THRESHOLD
    }
    pub fn feature_window_len() -> usize {
        windowing::DEFAULT_FEATURE_WINDOW_LEN
    }
    pub fn feature_step() -> usize {
        windowing::DEFAULT_FEATURE_STEP
    }
    pub fn baseline_dir() -> PathBuf {
        PathBuf::from(baseline::DEFAULT_BASELINE_DIR)
    }
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self {
            window: defaults::moving_average_window(),
            threshold: defaults::moving_average_threshold(),
        }
    }
}

impl Default for FeatureWindowConfig {
    fn default() -> Self {
        Self {
            window_len: defaults::feature_window_len(),
            step: defaults::feature_step(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            static_threshold: defaults::static_threshold(),
            moving_average: MovingAverageConfig::default(),
            feature_window: FeatureWindowConfig::default(),
            baseline_dir: defaults::baseline_dir(),
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(self.static_threshold.is_finite() && self.static_threshold > 0.0) {
            errors.push(format!(
                "Static threshold must be a positive finite number, got {}",
                self.static_threshold
            ));
        }

        if !(self.moving_average.threshold.is_finite() && self.moving_average.threshold > 0.0) {
            errors.push(format!(
                "Moving-average threshold must be a positive finite number, got {}",
                self.moving_average.threshold
            ));
        }

        if self.moving_average.window < windowing::MIN_WINDOW_SIZE {
            errors.push(format!(
                "Moving-average window must be at least {} sample, got {}",
                windowing::MIN_WINDOW_SIZE,
                self.moving_average.window
            ));
        }

        if self.feature_window.window_len < windowing::MIN_WINDOW_SIZE {
            errors.push(format!(
                "Feature window length must be at least {} sample, got {}",
                windowing::MIN_WINDOW_SIZE,
                self.feature_window.window_len
            ));
        }

        if self.feature_window.step < windowing::MIN_WINDOW_SIZE {
            errors.push(format!(
                "Feature window step must be at least {} sample, got {}",
                windowing::MIN_WINDOW_SIZE,
                self.feature_window.step
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Load and validate a configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Err(err) => return Err(ConfigError::from(err)),
        };

        let config: Self = toml::from_str(&text)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file does not exist
    FileNotFound(String),
    /// Configuration file is not valid TOML for [`AnalysisConfig`]
    ParseError(String),
    /// Configuration parsed but failed consistency validation
    Invalid(Vec<String>),
    /// Underlying filesystem failure
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Configuration file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Configuration parse error: {}", msg),
            ConfigError::Invalid(errors) => {
                write!(f, "Configuration validation errors:")?;
                for error in errors {
                    write!(f, "\n  {}", error)?;
                }
                Ok(())
            }
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = AnalysisConfig::default();
        assert_eq!(config.static_threshold, thresholds::STATIC_ANOMALY_THRESHOLD);
        assert_eq!(
            config.moving_average.threshold,
            thresholds::MOVING_AVERAGE_ANOMALY_THRESHOLD
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AnalysisConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AnalysisConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.static_threshold, deserialized.static_threshold);
        assert_eq!(config.moving_average.window, deserialized.moving_average.window);
    }

    #[test]
    fn test_config_validation_rejects_zero_window() {
        let mut config = AnalysisConfig::default();
        config.moving_average.window = 0;

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Moving-average window")));
    }

    #[test]
    fn test_config_validation_rejects_bad_thresholds() {
        let mut config = AnalysisConfig::default();
        config.static_threshold = 0.0;
        config.moving_average.threshold = f32::NAN;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalysisConfig = toml::from_str("static_threshold = 2.5").unwrap();
        assert_eq!(config.static_threshold, 2.5);
        assert_eq!(
            config.moving_average.window,
            windowing::DEFAULT_MOVING_AVERAGE_WINDOW
        );
    }
}
