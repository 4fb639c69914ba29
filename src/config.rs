use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::FillColor;
use crate::error::ConfigError;
use crate::pixel_buffer::OUTLINE_THRESHOLD;

/// Flood fill parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillSettings {
    /// Max per-channel distance from the seed color that still counts as inside
    pub tolerance: u8,
    /// Channels below this (with non-zero alpha) mark outline pixels
    pub outline_threshold: u8,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            tolerance: 10,
            outline_threshold: OUTLINE_THRESHOLD,
        }
    }
}

/// Zoom limits and pan behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub min_scale: f32,
    pub max_scale: f32,
    pub default_scale: f32,
    /// Fraction of the view the artwork may cover when fitting on load
    pub fit_margin: f32,
    /// Apply pan updates once per frame instead of on every move event
    pub coalesce_pan: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            default_scale: 1.7,
            fit_margin: 0.9,
            coalesce_pan: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Upper bound on stored snapshots, `None` for unbounded
    pub max_entries: Option<usize>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: Some(100),
        }
    }
}

/// Editor configuration, usually loaded from a JSON file.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub fill: FillSettings,
    pub viewport: ViewportSettings,
    pub history: HistorySettings,
    pub default_color: FillColor,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fill: FillSettings::default(),
            viewport: ViewportSettings::default(),
            history: HistorySettings::default(),
            default_color: FillColor::rgb(0xFF, 0x57, 0x33),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Checks the scale range, fit margin and history bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.viewport;
        if !(v.min_scale > 0.0 && v.min_scale <= v.max_scale) {
            return Err(ConfigError::Invalid(format!(
                "scale range [{}, {}] is empty or non-positive",
                v.min_scale, v.max_scale
            )));
        }
        if !(v.min_scale..=v.max_scale).contains(&v.default_scale) {
            return Err(ConfigError::Invalid(format!(
                "default_scale {} outside [{}, {}]",
                v.default_scale, v.min_scale, v.max_scale
            )));
        }
        if !(v.fit_margin > 0.0 && v.fit_margin <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "fit_margin {} must be in (0, 1]",
                v.fit_margin
            )));
        }
        if self.history.max_entries.is_some_and(|n| n < 2) {
            return Err(ConfigError::Invalid("history.max_entries must be at least 2".into()));
        }
        Ok(())
    }
}
