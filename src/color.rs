use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use thiserror::Error;

/// Reasons a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex color: expected 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex color: {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// An 8-bit sRGB color, the only value the palette hands back to callers.
///
/// `Display` and [`Color::to_hex`] give the lowercase `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexError::InvalidDigit(hex.to_string()));
        }
        if digits.len() != 6 {
            return Err(HexError::InvalidLength(digits.len()));
        }
        // ASCII-only, so every two-byte slice is on a char boundary
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| HexError::InvalidDigit(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Quantize a gamma-encoded sRGB triple to bytes.
    ///
    /// Each channel is rounded to the nearest of 256 levels and clamped,
    /// so slightly out-of-range inputs still land on a valid byte.
    pub fn from_encoded(srgb: Srgb<f64>) -> Self {
        fn to_byte(c: f64) -> u8 {
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: to_byte(srgb.red),
            g: to_byte(srgb.green),
            b: to_byte(srgb.blue),
        }
    }

    /// Perceived brightness per ITU-R BT.601, in [0, 255].
    pub fn brightness(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Whether black text reads better than white on this background.
    pub fn is_light(self) -> bool {
        self.brightness() > 128.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Decode `#rrggbb` (the `#` is optional, digits are case-insensitive).
///
/// Malformed input yields `None` rather than an error so previewers can
/// fall back to printing the raw string.
pub fn decode_hex(hex: &str) -> Option<Color> {
    Color::from_hex(hex).ok()
}
