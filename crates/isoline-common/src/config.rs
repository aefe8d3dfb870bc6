//! Banding configuration and isoline group presets.
//!
//! Presets can be loaded from YAML or JSON. A preset file looks like:
//!
//! ```yaml
//! version: "1.0"
//! groups:
//!   - name: contours
//!     source: heights
//!     config:
//!       start: 20
//!       interval: 20
//!   - name: isohyets
//!     source: precipitation
//!     scale: 100
//!     config:
//!       interval: 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::field::PRECIPITATION_TO_MM;

/// Banding and post-processing options for one isoline group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolineConfig {
    /// Lowest band value considered (clamped up to the field minimum)
    pub start: f64,
    /// Width of each band; must be positive
    pub interval: f64,
    /// Report `max - value + start` instead of the raw band value
    pub reverse: bool,
    /// Bands with fewer crossing points are dropped
    #[serde(alias = "minPoints")]
    pub min_points: usize,
    /// Laplacian smoothing factor in [0, 1); 0 disables smoothing
    pub smoothing: f64,
    /// Decimal digits kept on smoothed coordinates
    pub precision: u32,
}

impl Default for IsolineConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            interval: 20.0,
            reverse: false,
            min_points: 10,
            smoothing: 0.2,
            precision: 2,
        }
    }
}

impl IsolineConfig {
    /// Default configuration with the given band interval.
    pub fn with_interval(interval: f64) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.interval > 0.0) || !self.interval.is_finite() {
            return Err(ConfigError::NonPositiveInterval(self.interval));
        }
        if !self.start.is_finite() {
            return Err(ConfigError::NonFiniteStart(self.start));
        }
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        Ok(())
    }
}

/// Which terrain field a group is contoured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Per-node elevation
    Heights,
    /// Per-node precipitation fraction
    Precipitation,
}

impl FieldSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSource::Heights => "heights",
            FieldSource::Precipitation => "precipitation",
        }
    }
}

/// A named isoline group and how to generate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPreset {
    pub name: String,
    pub source: FieldSource,
    /// Multiplier applied to the source field before contouring
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub config: IsolineConfig,
}

fn default_scale() -> f64 {
    1.0
}

impl GroupPreset {
    pub fn new(name: impl Into<String>, source: FieldSource, config: IsolineConfig) -> Self {
        Self {
            name: name.into(),
            source,
            scale: 1.0,
            config,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Elevation contours, isobaths and isohyets.
    pub fn standard() -> Vec<GroupPreset> {
        vec![
            GroupPreset::new(
                "contours",
                FieldSource::Heights,
                IsolineConfig {
                    start: 20.0,
                    interval: 20.0,
                    ..IsolineConfig::default()
                },
            ),
            GroupPreset::new(
                "isobaths",
                FieldSource::Heights,
                IsolineConfig {
                    start: 0.0,
                    interval: 5.0,
                    reverse: true,
                    ..IsolineConfig::default()
                },
            ),
            GroupPreset::new(
                "isohyets",
                FieldSource::Precipitation,
                IsolineConfig {
                    start: 0.0,
                    interval: 50.0,
                    ..IsolineConfig::default()
                },
            )
            .with_scale(PRECIPITATION_TO_MM),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidPreset("group name is empty".to_string()));
        }
        if !self.scale.is_finite() {
            return Err(ConfigError::InvalidPreset(format!(
                "{}: scale must be finite, got {}",
                self.name, self.scale
            )));
        }
        self.config.validate()
    }
}

/// Root of a preset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default = "default_version")]
    pub version: String,
    pub groups: Vec<GroupPreset>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for PresetFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            groups: GroupPreset::standard(),
        }
    }
}

impl PresetFile {
    /// Load presets from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().map_or(false, |ext| ext == "json");

        let presets = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            groups = presets.groups.len(),
            "Loaded isoline presets"
        );
        Ok(presets)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let presets: PresetFile = serde_json::from_str(json)?;
        presets.validate()?;
        Ok(presets)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let presets: PresetFile = serde_yaml::from_str(yaml)?;
        presets.validate()?;
        Ok(presets)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every preset and reject duplicate group names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, group) in self.groups.iter().enumerate() {
            group.validate()?;
            if self.groups[..i].iter().any(|g| g.name == group.name) {
                return Err(ConfigError::InvalidPreset(format!(
                    "duplicate group name: {}",
                    group.name
                )));
            }
        }
        Ok(())
    }
}
