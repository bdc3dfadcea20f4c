//! Styler settings.
//!
//! Settings can be read from a JSON file. Every field is optional in the file
//! and falls back to its default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How the target renderer interprets the alpha channel of fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaConvention {
    /// The renderer draws fills with twice the alpha it is given. Colors are
    /// emitted exactly as such a renderer expects.
    #[default]
    Doubled,
    /// The renderer draws alpha as given. Emitted fill alpha is doubled so
    /// fills look the same as on a `Doubled` renderer.
    Straight,
}

/// Errors that can occur while loading settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
    /// A value is outside its allowed range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Settings of a [`Styler`](super::Styler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylerConfig {
    /// Name of the renderer data layer the records are put on.
    pub layer_name: String,
    /// Center color of roads that only have side strokes.
    pub road_color: String,
    /// Outline color of roads that only have side strokes.
    pub road_outline_color: String,
    /// Brightness factor for outline colors (0..=1).
    pub darken_factor: f32,
    /// Transparency added to polygon fills (0..=1).
    pub transparency: f32,
    pub alpha_convention: AlphaConvention,
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self {
            layer_name: "streetcomplete_map_data".to_string(),
            road_color: "#ffffff".to_string(),
            road_outline_color: "#aaaaaa".to_string(),
            darken_factor: 0.67,
            transparency: 0.6,
            alpha_convention: AlphaConvention::Doubled,
        }
    }
}

impl StylerConfig {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reads settings from a JSON file, falling back to defaults if that fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("Loaded styler config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.darken_factor) {
            return Err(ConfigError::Invalid(format!(
                "darken_factor must be within 0..=1, got {}",
                self.darken_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(ConfigError::Invalid(format!(
                "transparency must be within 0..=1, got {}",
                self.transparency
            )));
        }
        Ok(())
    }

    /// Factor applied to the fill alpha after transparency was added.
    pub(crate) fn alpha_scale(&self) -> f32 {
        match self.alpha_convention {
            AlphaConvention::Doubled => 1.0,
            AlphaConvention::Straight => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StylerConfig::from_json(r##"{"road_color": "#eeeeee"}"##).unwrap();
        assert_eq!(config.road_color, "#eeeeee");
        assert_eq!(config.darken_factor, 0.67);
        assert_eq!(config.alpha_convention, AlphaConvention::Doubled);
    }

    #[test]
    fn test_alpha_convention_json() {
        let config = StylerConfig::from_json(r#"{"alpha_convention": "straight"}"#).unwrap();
        assert_eq!(config.alpha_convention, AlphaConvention::Straight);
        assert_eq!(config.alpha_scale(), 2.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = StylerConfig::from_json(r#"{"transparency": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = StylerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = StylerConfig::load_or_default("/nonexistent/styler.json");
        assert_eq!(config, StylerConfig::default());
    }
}
