//! TOML bar configuration.
//!
//! ```toml
//! size = 40
//! iterations = 500
//! update_every = 5
//! show_percentage = true
//!
//! [colors]
//! kind = "gradient"
//! colors = [{ fg = "#ff0000", bg = "#000000" }, { fg = "#00ff00" }]
//! positions = [0.0, 1.0]
//! ```

use crate::compositor::BarCompositor;
use crate::driver::{DriverOptions, FrameDriver};
use crate::error::Result;
use crate::stats::{Clock, SystemClock};
use crate::symbols::UNFILLED;
use chromabar_core::{ColorError, ColorSequence, DisplayColor, Gradient, Palette, PaletteMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_size() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_update_every() -> usize {
    1
}

fn default_unfilled_glyph() -> char {
    UNFILLED
}

/// Color source section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorsConfig {
    /// One color for every cell.
    Constant {
        /// The color.
        color: DisplayColor,
    },
    /// Interpolated anchors.
    Gradient {
        /// Anchor colors.
        colors: Vec<DisplayColor>,
        /// Anchor positions; evenly spaced when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        positions: Option<Vec<f64>>,
    },
    /// Nearest-anchor selection.
    Palette {
        /// Anchor colors.
        colors: Vec<DisplayColor>,
        /// Anchor positions; evenly spaced when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        positions: Option<Vec<f64>>,
        /// Cycle through the anchors instead of spreading them.
        #[serde(default)]
        repeat: bool,
    },
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self::Constant {
            color: DisplayColor::WHITE_ON_BLACK,
        }
    }
}

impl ColorsConfig {
    /// Resolve into a sequence of `size` colors.
    pub fn sequence(&self, size: usize) -> Result<ColorSequence> {
        let sequence = match self {
            Self::Constant { color } => ColorSequence::constant(*color, size)?,
            Self::Gradient { colors, positions } => {
                let gradient = match positions {
                    Some(positions) => Gradient::with_positions(colors.clone(), positions.clone())?,
                    None => Gradient::new(colors.clone())?,
                };
                ColorSequence::gradient(gradient, size)?
            }
            Self::Palette {
                colors,
                positions,
                repeat,
            } => {
                let palette = match positions {
                    Some(positions) => Palette::with_positions(colors.clone(), positions.clone())?,
                    None => Palette::new(colors.clone())?,
                };
                let mode = if *repeat {
                    PaletteMode::Repeat
                } else {
                    PaletteMode::Spread
                };
                ColorSequence::palette(palette, mode, size)?
            }
        };
        Ok(sequence)
    }
}

/// A complete bar description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarConfig {
    /// Cells in the bar.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Progress steps; the run yields one more frame than this.
    pub iterations: usize,
    /// Append throughput statistics.
    #[serde(default = "default_true")]
    pub stats: bool,
    /// Frames between statistics refreshes.
    #[serde(default = "default_update_every")]
    pub update_every: usize,
    /// Append ` i/N`.
    #[serde(default)]
    pub show_counter: bool,
    /// Append the percentage.
    #[serde(default)]
    pub show_percentage: bool,
    /// Drop backgrounds from every cell color.
    #[serde(default)]
    pub strip_background: bool,
    /// Glyph for unfilled cells.
    #[serde(default = "default_unfilled_glyph")]
    pub unfilled_glyph: char,
    /// Build every bar string up front.
    #[serde(default = "default_true")]
    pub precompute: bool,
    /// Color source.
    #[serde(default)]
    pub colors: ColorsConfig,
}

impl BarConfig {
    /// Config with defaults for everything but `iterations`.
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self {
            size: default_size(),
            iterations,
            stats: true,
            update_every: default_update_every(),
            show_counter: false,
            show_percentage: false,
            strip_background: false,
            unfilled_glyph: UNFILLED,
            precompute: true,
            colors: ColorsConfig::default(),
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Driver options carried by this config.
    #[must_use]
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            stats: self.stats,
            update_every: self.update_every,
            show_counter: self.show_counter,
            show_percentage: self.show_percentage,
            precompute: self.precompute,
        }
    }

    /// Resolved cell colors.
    pub fn sequence(&self) -> Result<ColorSequence> {
        if self.size == 0 {
            return Err(ColorError::InvalidSize {
                what: "size",
                value: 0,
            }
            .into());
        }
        let sequence = self.colors.sequence(self.size)?;
        Ok(if self.strip_background {
            sequence.without_background()
        } else {
            sequence
        })
    }

    /// Validate and build a wall-clock driver.
    pub fn build(&self) -> Result<FrameDriver<SystemClock>> {
        self.build_with_clock(SystemClock::new())
    }

    /// Validate and build a driver timed by `clock`.
    pub fn build_with_clock<C: Clock>(&self, clock: C) -> Result<FrameDriver<C>> {
        let sequence = self.sequence()?;
        let compositor = BarCompositor::new(&sequence).with_unfilled_glyph(self.unfilled_glyph);
        FrameDriver::from_compositor(self.iterations, compositor, self.driver_options(), clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BarError;
    use chromabar_core::Rgb;

    #[test]
    fn test_minimal_config_defaults() {
        let config = BarConfig::from_toml_str("iterations = 10").unwrap();
        assert_eq!(config, BarConfig::new(10));
        assert_eq!(config.size, 50);
        assert!(config.stats);
        assert_eq!(config.unfilled_glyph, '░');
    }

    #[test]
    fn test_gradient_config() {
        let config = BarConfig::from_toml_str(
            r##"
            size = 3
            iterations = 6

            [colors]
            kind = "gradient"
            colors = [{ fg = "#ff0000", bg = "#000000" }, { fg = "#00ff00" }]
            "##,
        )
        .unwrap();
        let cells = config.sequence().unwrap().to_vec();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], DisplayColor::with_background(Rgb::RED, Rgb::BLACK));
        assert_eq!(cells[2].foreground, Rgb::GREEN);
    }

    #[test]
    fn test_palette_repeat_config() {
        let config = BarConfig::from_toml_str(
            r##"
            size = 4
            iterations = 2
            strip_background = true

            [colors]
            kind = "palette"
            repeat = true
            colors = [{ fg = "#ff0000", bg = "#ffffff" }, { fg = "#0000ff" }]
            "##,
        )
        .unwrap();
        let cells = config.sequence().unwrap().to_vec();
        let red = DisplayColor::new(Rgb::RED);
        let blue = DisplayColor::new(Rgb::BLUE);
        assert_eq!(cells, vec![red, blue, red, blue]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = BarConfig::from_toml_str("iterations = 1\nwidth = 3").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let err = BarConfig::from_toml_str(
            r#"
            iterations = 1
            [colors]
            kind = "constant"
            color = { fg = "red" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }

    #[test]
    fn test_build_validates() {
        let mut config = BarConfig::new(0);
        assert!(config.build().is_err());
        config.iterations = 5;
        config.size = 0;
        assert!(config.build().is_err());
        config.size = 2;
        config.update_every = 0;
        assert!(config.build().is_err());
        config.update_every = 1;
        assert_eq!(config.build().unwrap().frame_total(), 6);
    }

    #[test]
    fn test_mismatched_positions() {
        let colors = ColorsConfig::Gradient {
            colors: vec![DisplayColor::default(); 2],
            positions: Some(vec![0.0]),
        };
        assert!(matches!(
            colors.sequence(4),
            Err(BarError::Color(ColorError::MismatchedAnchorLengths { .. }))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = BarConfig::new(3);
        config.colors = ColorsConfig::Palette {
            colors: vec![DisplayColor::new(Rgb::RED)],
            positions: None,
            repeat: true,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(BarConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BarConfig::load("/nonexistent/chromabar.toml").unwrap_err();
        assert!(matches!(err, BarError::Io(_)));
    }
}
