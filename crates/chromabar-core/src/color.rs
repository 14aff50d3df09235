//! Resolved terminal colors.
//!
//! A [`DisplayColor`] is what the bar actually paints with: an 8-bit
//! foreground plus an optional 8-bit background, already projected out of
//! whatever color space it came from. Its [`Display`](std::fmt::Display)
//! impl yields the raw SGR parameter list that goes between `ESC[` and `m`.

use crate::error::{ColorError, Result};
use crate::space::ColorSpace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a triple.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        let invalid = || ColorError::InvalidHex {
            input: hex.to_string(),
        };

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Self::new(r, g, b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array, in R, G, B order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel linear blend with truncation toward zero.
    ///
    /// Ratio 0.0 returns `self` and 1.0 returns `other` exactly.
    #[must_use]
    pub fn lerp(&self, other: &Self, ratio: f64) -> Self {
        let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio) as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "2;{};{};{}", self.r, self.g, self.b)
    }
}

/// Foreground color with an optional background, ready for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayColor {
    /// Foreground (glyph) color.
    #[serde(rename = "fg")]
    pub foreground: Rgb,
    /// Background (cell) color, if any.
    #[serde(rename = "bg", default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
}

impl DisplayColor {
    /// White on black, the default bar color.
    pub const WHITE_ON_BLACK: Self = Self::with_background(Rgb::WHITE, Rgb::BLACK);

    /// Foreground-only color.
    #[must_use]
    pub const fn new(foreground: Rgb) -> Self {
        Self {
            foreground,
            background: None,
        }
    }

    /// Foreground on background.
    #[must_use]
    pub const fn with_background(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background: Some(background),
        }
    }

    /// Resolve a display color from color spaces.
    ///
    /// Each space is projected to RGB once, here; alpha is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnimplementedColorSpace`] if either space has no
    /// RGB conversion.
    pub fn from_spaces(foreground: &ColorSpace, background: Option<&ColorSpace>) -> Result<Self> {
        let foreground = foreground.to_rgb()?;
        let background = background.map(ColorSpace::to_rgb).transpose()?;
        Ok(Self {
            foreground,
            background,
        })
    }

    /// Copy of this color with the background removed.
    #[must_use]
    pub const fn without_background(&self) -> Self {
        Self::new(self.foreground)
    }

    /// Blend toward `other` by `ratio`.
    ///
    /// Foregrounds are always blended. Backgrounds are blended when both
    /// sides have one; when only one side has a background it is kept
    /// as-is, and when neither does the result has none.
    #[must_use]
    pub fn interpolate(&self, other: &Self, ratio: f64) -> Self {
        let background = match (self.background, other.background) {
            (Some(a), Some(b)) => Some(a.lerp(&b, ratio)),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        };
        Self {
            foreground: self.foreground.lerp(&other.foreground, ratio),
            background,
        }
    }

    /// Full SGR escape prefix, `ESC[{params}m`.
    #[must_use]
    pub fn escape(&self) -> String {
        format!("\x1b[{self}m")
    }
}

impl Default for DisplayColor {
    fn default() -> Self {
        Self::WHITE_ON_BLACK
    }
}

impl From<Rgb> for DisplayColor {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb)
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "38;{}", self.foreground)?;
        if let Some(bg) = self.background {
            write!(f, ";48;{bg}")?;
        }
        Ok(())
    }
}
