//! Viewer configuration
//!
//! The built-in configuration ships as `defaults.yaml` inside the module.
//! The host page can override parts of it when calling `initViewer`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SampleEntry;

const BUILTIN_YAML: &str = include_str!("defaults.yaml");

static BUILTIN: Lazy<ViewerConfig> = Lazy::new(|| {
    ViewerConfig::from_yaml(BUILTIN_YAML).expect("embedded defaults.yaml must be valid")
});

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(String),

    #[error("zoom.min must be positive (got {0})")]
    NonPositiveMinScale(f64),

    #[error("zoom.min ({min}) must not exceed zoom.max ({max})")]
    InvertedScaleRange { min: f64, max: f64 },

    #[error("zoom.step must be positive (got {0})")]
    NonPositiveStep(f64),

    #[error("raster.jpeg_quality must be within 1..=100 (got {0})")]
    JpegQuality(u8),

    #[error("raster.max_dimension must be positive")]
    ZeroMaxDimension,

    #[error("default_base_name must not be empty")]
    EmptyBaseName,
}

/// Scale limits and button step for the preview viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Raster export settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    pub jpeg_quality: u8,
    /// Largest allowed width or height of an exported image, in pixels
    pub max_dimension: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 3.0,
            step: 0.1,
        }
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 92,
            max_dimension: 8192,
        }
    }
}

/// Any field missing from a YAML document takes its built-in value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "builtin_base_name")]
    pub default_base_name: String,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub raster: RasterConfig,
    #[serde(default = "builtin_samples")]
    pub samples: Vec<SampleEntry>,
}

fn builtin_base_name() -> String {
    "svg-preview".to_string()
}

// Only reached for documents other than defaults.yaml, which lists its samples
fn builtin_samples() -> Vec<SampleEntry> {
    BUILTIN.samples.clone()
}

/// Partial configuration passed from JavaScript; absent fields keep the built-in value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub default_base_name: Option<String>,
    pub min_scale: Option<f64>,
    pub max_scale: Option<f64>,
    pub zoom_step: Option<f64>,
    pub jpeg_quality: Option<u8>,
    pub max_dimension: Option<u32>,
    pub samples: Option<Vec<SampleEntry>>,
}

impl ViewerConfig {
    /// Parse and validate a configuration document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration embedded in the module
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(name) = overrides.default_base_name {
            self.default_base_name = name;
        }
        if let Some(min) = overrides.min_scale {
            self.zoom.min = min;
        }
        if let Some(max) = overrides.max_scale {
            self.zoom.max = max;
        }
        if let Some(step) = overrides.zoom_step {
            self.zoom.step = step;
        }
        if let Some(quality) = overrides.jpeg_quality {
            self.raster.jpeg_quality = quality;
        }
        if let Some(max_dimension) = overrides.max_dimension {
            self.raster.max_dimension = max_dimension;
        }
        if let Some(samples) = overrides.samples {
            self.samples = samples;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        // NaN fails every comparison, so test for "not positive" rather than "<= 0"
        if !(zoom.min > 0.0) {
            return Err(ConfigError::NonPositiveMinScale(zoom.min));
        }
        if !(zoom.min <= zoom.max) {
            return Err(ConfigError::InvertedScaleRange {
                min: zoom.min,
                max: zoom.max,
            });
        }
        if !(zoom.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(zoom.step));
        }
        if !(1..=100).contains(&self.raster.jpeg_quality) {
            return Err(ConfigError::JpegQuality(self.raster.jpeg_quality));
        }
        if self.raster.max_dimension == 0 {
            return Err(ConfigError::ZeroMaxDimension);
        }
        if self.default_base_name.trim().is_empty() {
            return Err(ConfigError::EmptyBaseName);
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
