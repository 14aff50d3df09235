//! Color Sequence Generator.
//!
//! A [`ColorSequence`] turns one [`ColorSource`] into exactly `count`
//! display colors, one per bar cell. The source is a closed enum chosen at
//! construction, so sampling is a plain `match` with no runtime type
//! inspection.
//!
//! Sampling positions are `k / (count - 1)` for `k` in `0..count`, so the
//! first and last cells land exactly on the first and last anchors. A
//! single-cell sequence samples at 0.0.

use crate::color::DisplayColor;
use crate::error::{ColorError, Result};
use crate::gradient::Gradient;
use crate::palette::Palette;
use std::iter::FusedIterator;
use std::ops::Range;

/// How a palette is walked when producing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Sample evenly over [0, 1], snapping to the nearest anchor.
    #[default]
    Spread,
    /// Ignore positions and cycle through the anchors in sorted order.
    Repeat,
}

/// Where a sequence takes its colors from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// One color for every cell.
    Constant(DisplayColor),
    /// Continuous interpolation.
    Gradient(Gradient),
    /// Discrete selection.
    Palette {
        /// Anchor colors.
        palette: Palette,
        /// Spread or repeat.
        mode: PaletteMode,
    },
}

impl ColorSource {
    /// Short strategy name, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Gradient(_) => "gradient",
            Self::Palette {
                mode: PaletteMode::Spread,
                ..
            } => "palette",
            Self::Palette {
                mode: PaletteMode::Repeat,
                ..
            } => "palette-repeat",
        }
    }
}

impl From<DisplayColor> for ColorSource {
    fn from(color: DisplayColor) -> Self {
        Self::Constant(color)
    }
}

impl From<Gradient> for ColorSource {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<Palette> for ColorSource {
    fn from(palette: Palette) -> Self {
        Self::Palette {
            palette,
            mode: PaletteMode::Spread,
        }
    }
}

/// A finite, restartable list of display colors of known length.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSequence {
    source: ColorSource,
    count: usize,
    strip_background: bool,
}

impl ColorSequence {
    /// Build a sequence of `count` colors from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidSize`] if `count` is zero.
    pub fn new(source: impl Into<ColorSource>, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(ColorError::InvalidSize {
                what: "count",
                value: count,
            });
        }
        let source = source.into();
        tracing::debug!(kind = source.kind(), count, "color sequence built");
        Ok(Self {
            source,
            count,
            strip_background: false,
        })
    }

    /// `count` copies of `color`.
    pub fn constant(color: DisplayColor, count: usize) -> Result<Self> {
        Self::new(color, count)
    }

    /// `count` evenly spaced samples of `gradient`.
    pub fn gradient(gradient: Gradient, count: usize) -> Result<Self> {
        Self::new(gradient, count)
    }

    /// `count` picks from `palette` using `mode`.
    pub fn palette(palette: Palette, mode: PaletteMode, count: usize) -> Result<Self> {
        Self::new(ColorSource::Palette { palette, mode }, count)
    }

    /// The same sequence with every background removed.
    #[must_use]
    pub fn without_background(mut self) -> Self {
        self.strip_background = true;
        self
    }

    /// The color source.
    #[must_use]
    pub const fn source(&self) -> &ColorSource {
        &self.source
    }

    /// Number of colors produced.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Always false: construction rejects empty sequences.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Color `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DisplayColor> {
        (index < self.count).then(|| self.resolve(index))
    }

    /// Iterate over all colors. Each call starts a fresh pass.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: self,
            range: 0..self.count,
        }
    }

    /// Collect every color.
    #[must_use]
    pub fn to_vec(&self) -> Vec<DisplayColor> {
        self.iter().collect()
    }

    fn position(&self, index: usize) -> f64 {
        if self.count == 1 {
            0.0
        } else {
            index as f64 / (self.count - 1) as f64
        }
    }

    fn resolve(&self, index: usize) -> DisplayColor {
        let color = match &self.source {
            ColorSource::Constant(color) => *color,
            ColorSource::Gradient(gradient) => gradient.sample(self.position(index)),
            ColorSource::Palette {
                palette,
                mode: PaletteMode::Spread,
            } => palette.sample(self.position(index)),
            ColorSource::Palette {
                palette,
                mode: PaletteMode::Repeat,
            } => palette.cyclic(index),
        };
        if self.strip_background {
            color.without_background()
        } else {
            color
        }
    }
}

impl<'a> IntoIterator for &'a ColorSequence {
    type Item = DisplayColor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ColorSequence`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    sequence: &'a ColorSequence,
    range: Range<usize>,
}

impl Iterator for Iter<'_> {
    type Item = DisplayColor;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|k| self.sequence.resolve(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|k| self.sequence.resolve(k))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
