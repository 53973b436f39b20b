//! Alignment configuration: snap tolerance and guide styling.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default snap tolerance in canvas units (zoom-independent).
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA hex")]
    InvalidColor(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Serializable guide color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl GuideColor {
    /// Default guide color, a light blue (#90D5FF).
    pub const LIGHT_BLUE: Self = Self {
        r: 0x90,
        g: 0xD5,
        b: 0xFF,
        a: 0xFF,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let valid_len = digits.len() == 6 || digits.len() == 8;
        if !valid_len || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self { r, g, b, a })
    }
}

impl From<GuideColor> for Color {
    fn from(color: GuideColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for GuideColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

/// Tunable alignment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Maximum canvas-space distance at which two features snap.
    pub tolerance: f64,
    /// Color applied to every emitted guide line.
    pub guide_color: GuideColor,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            guide_color: GuideColor::LIGHT_BLUE,
        }
    }
}

impl AlignmentConfig {
    /// Load a configuration from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable for comparisons.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    /// The guide color as a peniko color.
    pub fn color(&self) -> Color {
        self.guide_color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlignmentConfig::default();
        assert!((config.tolerance - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.guide_color, GuideColor::LIGHT_BLUE);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(
            GuideColor::from_hex("#90D5FF").unwrap(),
            GuideColor::LIGHT_BLUE
        );
        assert_eq!(
            GuideColor::from_hex("90d5ff").unwrap(),
            GuideColor::LIGHT_BLUE
        );
        assert_eq!(
            GuideColor::from_hex("#00000080").unwrap(),
            GuideColor::new(0, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(GuideColor::from_hex("#90D5F").is_err());
        assert!(GuideColor::from_hex("#90D5GG").is_err());
        assert!(GuideColor::from_hex("").is_err());
        assert!(GuideColor::from_hex("#90D5ré").is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = AlignmentConfig::from_json(r#"{"tolerance": 8.0}"#).unwrap();
        assert!((config.tolerance - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.guide_color, GuideColor::LIGHT_BLUE);
    }

    #[test]
    fn test_from_json_rejects_negative_tolerance() {
        let result = AlignmentConfig::from_json(r#"{"tolerance": -1.0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidTolerance(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_tolerance() {
        let config = AlignmentConfig {
            tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_roundtrip() {
        let color: Color = GuideColor::LIGHT_BLUE.into();
        let back: GuideColor = color.into();
        assert_eq!(back, GuideColor::LIGHT_BLUE);
    }
}
