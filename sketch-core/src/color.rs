//! Stroke colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SketchError, SketchResult};

/// An 8-bit-per-channel RGBA color.
///
/// Serialized as a hex string (`"#RRGGBB"` or `"#RRGGBBAA"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black, the default stroke color.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque red.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// Opaque orange.
    pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(0xFF, 0xEB, 0x3B);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0x4C, 0xAF, 0x50);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0x21, 0x96, 0xF3);
    /// Opaque purple.
    pub const PURPLE: Self = Self::rgb(0x9C, 0x27, 0xB0);

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidColor`] if the string is not one of the
    /// accepted hex forms.
    pub fn from_hex(hex: &str) -> SketchResult<Self> {
        let invalid = || SketchError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #RGB expands each nibble: F -> FF
                let mut rgb = [0u8; 3];
                for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
                    let nibble = channel(&c.to_string())?;
                    *slot = nibble * 0x11;
                }
                Ok(Self::rgb(rgb[0], rgb[1], rgb[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = SketchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Swatches offered by the color picker when no palette is configured.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::BLACK,
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::PURPLE,
    Color::WHITE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color = Color::from_hex("#FF8000").expect("valid hex");
        assert_eq!(color, Color::rgb(0xFF, 0x80, 0x00));
    }

    #[test]
    fn test_parse_short_form_expands_nibbles() {
        let color = Color::from_hex("#F0A").expect("valid hex");
        assert_eq!(color, Color::rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_parse_with_alpha() {
        let color = Color::from_hex("#11223380").expect("valid hex");
        assert_eq!(color, Color::rgba(0x11, 0x22, 0x33, 0x80));
        assert_eq!(color.to_hex(), "#11223380");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Color::from_hex("#abcdef").expect("lower"),
            Color::from_hex("#ABCDEF").expect("upper")
        );
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "000000", "#12345", "#GGHHII", "#+1+2+3", "#1234567890"] {
            assert!(
                matches!(Color::from_hex(bad), Err(SketchError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_opaque_formats_without_alpha() {
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::BLUE).expect("serialize");
        assert_eq!(json, "\"#2196F3\"");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Color::BLUE);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_default_palette_starts_with_default_color() {
        assert_eq!(DEFAULT_PALETTE[0], Color::default());
    }
}
