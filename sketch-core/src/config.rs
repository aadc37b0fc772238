//! Drawing session configuration.

use serde::Deserialize;

use crate::color::DEFAULT_PALETTE;
use crate::{Color, SketchError, SketchResult};

/// Default capacity of the snapshot broadcast channel.
pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 64;

/// Configuration for a drawing session.
///
/// Every field is optional when loading from JSON:
///
/// ```
/// use sketch_core::{Color, SketchConfig};
///
/// let config = SketchConfig::from_json(r##"{"default_color": "#FF0000"}"##).unwrap();
/// assert_eq!(config.default_color, Color::RED);
/// assert_eq!(config.palette.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Color selected when the session starts.
    pub default_color: Color,
    /// Swatches offered by the color picker.
    pub palette: Vec<Color>,
    /// How many unread snapshots a lagging [`SharedMachine`](crate::SharedMachine)
    /// subscriber may fall behind before it starts missing snapshots.
    pub snapshot_capacity: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            default_color: Color::BLACK,
            palette: DEFAULT_PALETTE.to_vec(),
            snapshot_capacity: DEFAULT_SNAPSHOT_CAPACITY,
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Serialization`] for malformed JSON or colors,
    /// and [`SketchError::InvalidConfig`] if [`validate`](Self::validate)
    /// fails.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidConfig`] if the palette is empty or the
    /// snapshot capacity is zero.
    pub fn validate(&self) -> SketchResult<()> {
        if self.palette.is_empty() {
            return Err(SketchError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }
        if self.snapshot_capacity == 0 {
            return Err(SketchError::InvalidConfig(
                "snapshot_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SketchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_color, Color::BLACK);
        assert_eq!(config.snapshot_capacity, DEFAULT_SNAPSHOT_CAPACITY);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SketchConfig::from_json("{}").expect("defaults");
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config = SketchConfig::from_json(
            r##"{"default_color":"#00F","palette":["#00F","#FFF"],"snapshot_capacity":8}"##,
        )
        .expect("valid");
        assert_eq!(config.default_color, Color::rgb(0, 0, 0xFF));
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.snapshot_capacity, 8);
    }

    #[test]
    fn test_bad_color_is_serialization_error() {
        let result = SketchConfig::from_json(r#"{"default_color":"black"}"#);
        assert!(matches!(result, Err(SketchError::Serialization(_))));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = SketchConfig::from_json(r#"{"palette":[]}"#);
        assert!(matches!(result, Err(SketchError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = SketchConfig::from_json(r#"{"snapshot_capacity":0}"#);
        assert!(matches!(result, Err(SketchError::InvalidConfig(_))));
    }
}
