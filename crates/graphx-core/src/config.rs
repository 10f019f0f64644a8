//! Canvas configuration.

use crate::error::{CanvasError, CanvasResult};
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Tunables for a [`Canvas`](crate::Canvas). Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Initial viewBox size.
    pub viewport: Size,
    /// Inset subtracted from the local position before it is reported as the cursor.
    pub cursor_inset: Vec2,
    /// Extra reach, in canvas units, for geometric hit-testing.
    pub hit_tolerance: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1000.0, 800.0),
            cursor_inset: Vec2::new(10.0, 10.0),
            hit_tolerance: 4.0,
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(|e| CanvasError::Config(e.to_string()))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert!((config.viewport.width - 1000.0).abs() < f64::EPSILON);
        assert!((config.viewport.height - 800.0).abs() < f64::EPSILON);
        assert!((config.hit_tolerance - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json() {
        let config = CanvasConfig::from_json(r#"{"hit_tolerance": 8.0}"#).unwrap();
        assert!((config.hit_tolerance - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.cursor_inset, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_invalid_json() {
        let err = CanvasConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CanvasError::Config(_)));
    }

    #[test]
    fn test_roundtrip() {
        let config = CanvasConfig {
            hit_tolerance: 1.5,
            ..CanvasConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(CanvasConfig::from_json(&json).unwrap(), config);
    }
}
