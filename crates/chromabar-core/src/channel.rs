//! Channel validation.
//!
//! Every color-space channel is a scalar with an inclusive valid range.
//! [`validate`] is the single check all constructors and setters funnel
//! through; [`Channel`] keeps a value together with its range so that
//! mutation re-validates.

use crate::error::{ColorError, Result};
use std::fmt;

/// Inclusive numeric range a channel value must lie in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Whether the range is an integer range (affects display only).
    pub integral: bool,
}

impl ChannelRange {
    /// 8-bit integer channel: [0, 255].
    pub const UINT8: Self = Self::integer(0.0, 255.0);
    /// Unit interval: [0.0, 1.0]. Alpha, saturation, positions.
    pub const UNIT: Self = Self::float(0.0, 1.0);
    /// Hue angle in degrees: [0.0, 360.0].
    pub const DEGREES: Self = Self::float(0.0, 360.0);
    /// Percentage-style lightness/chroma: [0.0, 100.0].
    pub const PERCENT: Self = Self::float(0.0, 100.0);
    /// CIELAB a/b axes: [-128.0, 127.0].
    pub const LAB_AXIS: Self = Self::float(-128.0, 127.0);
    /// Oklab a/b axes: [-0.4, 0.4].
    pub const OKLAB_AXIS: Self = Self::float(-0.4, 0.4);
    /// Oklch chroma: [0.0, 0.4].
    pub const OKLCH_CHROMA: Self = Self::float(0.0, 0.4);
    /// CIE X under D65: [0.0, 95.047].
    pub const X_D65: Self = Self::float(0.0, 95.047);
    /// CIE Z under D65: [0.0, 108.883].
    pub const Z_D65: Self = Self::float(0.0, 108.883);
    /// CIE X under D50: [0.0, 96.6797].
    pub const X_D50: Self = Self::float(0.0, 96.6797);
    /// CIE Z under D50: [0.0, 82.5188].
    pub const Z_D50: Self = Self::float(0.0, 82.5188);

    /// Create an integer range.
    #[must_use]
    pub const fn integer(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            integral: true,
        }
    }

    /// Create a floating-point range.
    #[must_use]
    pub const fn float(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            integral: false,
        }
    }

    /// Check whether `value` lies inside the range. NaN never does.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.integral {
            write!(f, "[{}, {}]", self.min as i64, self.max as i64)
        } else {
            write!(f, "[{:.1}, {:.1}]", self.min, self.max)
        }
    }
}

/// Check `value` against `range`, naming the channel in the error.
pub fn validate(channel: &'static str, value: f64, range: ChannelRange) -> Result<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(ColorError::ChannelOutOfRange {
            channel,
            value,
            range,
        })
    }
}

/// A named channel value that is always inside its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    name: &'static str,
    value: f64,
    range: ChannelRange,
}

impl Channel {
    /// Create a validated channel.
    pub fn new(name: &'static str, value: f64, range: ChannelRange) -> Result<Self> {
        validate(name, value, range)?;
        Ok(Self { name, value, range })
    }

    /// Build a channel whose value is known to be in range.
    pub(crate) const fn trusted(name: &'static str, value: f64, range: ChannelRange) -> Self {
        Self { name, value, range }
    }

    /// Channel name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.value
    }

    /// Declared range.
    #[must_use]
    pub const fn range(&self) -> ChannelRange {
        self.range
    }

    /// Replace the value. On failure the old value is kept.
    pub fn set(&mut self, value: f64) -> Result<()> {
        validate(self.name, value, self.range)?;
        self.value = value;
        Ok(())
    }
}
