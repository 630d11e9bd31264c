//! Color tokens and conversion helpers.
//!
//! A [`Color`] is an opaque token handed to the charting backend. Bindings
//! never look inside it; decoding to RGB is only done on request.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque color value, usually a hex string such as `#E69F00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Create a color from any token. The text is stored as given.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Create a `#RRGGBB` color from 8-bit channels.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2]))
    }

    /// Create a color from floating point channels in range 0.0-1.0.
    pub fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_rgb([to_u8(r), to_u8(g), to_u8(b)])
    }

    /// The raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode `#RRGGBB` or `#RGB` hex text into channels.
    ///
    /// Returns `None` for anything else (named colors, malformed hex).
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        let hex = self.0.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some([r, g, b])
            }
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    rgb[i] = v * 17;
                }
                Some(rgb)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let (r, g, b) = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((r - 1.0).abs() < 0.01);
        assert!(g.abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        let (r, g, b) = hsv_to_rgb(480.0, 1.0, 1.0);
        assert!(r.abs() < 0.01);
        assert!((g - 1.0).abs() < 0.01);
        assert!(b.abs() < 0.01);
    }

    #[test]
    fn test_from_rgb_formats_upper_hex() {
        assert_eq!(Color::from_rgb([230, 159, 0]).as_str(), "#E69F00");
        assert_eq!(Color::from_rgb_f32(0.0, 0.0, 1.0).as_str(), "#0000FF");
    }

    #[test]
    fn test_to_rgb_long_and_short_forms() {
        assert_eq!(Color::new("#56b4e9").to_rgb(), Some([0x56, 0xB4, 0xE9]));
        assert_eq!(Color::new("#fff").to_rgb(), Some([255, 255, 255]));
    }

    #[test]
    fn test_to_rgb_rejects_non_hex_tokens() {
        assert_eq!(Color::new("steelblue").to_rgb(), None);
        assert_eq!(Color::new("#12345").to_rgb(), None);
        assert_eq!(Color::new("#GG0000").to_rgb(), None);
        assert_eq!(Color::new("#+1+2+3").to_rgb(), None);
        assert_eq!(Color::new("#+F+").to_rgb(), None);
    }

    #[test]
    fn test_color_is_opaque_token() {
        let color = Color::new("not a color");
        assert_eq!(color.to_string(), "not a color");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"not a color\"");
    }
}
