//! Error types for chromabar-core.

use crate::channel::ChannelRange;
use thiserror::Error;

/// Errors raised while building colors, anchor sets and color sequences.
///
/// Every variant is a configuration-time failure: nothing in this crate
/// retries, and no partially-built value is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A channel value fell outside its declared inclusive range.
    #[error("{value} is out of bounds for the {channel} channel. Expected range: {range}")]
    ChannelOutOfRange {
        /// Channel name (e.g. "red", "hue", "position").
        channel: &'static str,
        /// The rejected value.
        value: f64,
        /// The range the value had to lie in.
        range: ChannelRange,
    },

    /// A count, size or iteration total was zero.
    #[error("{what} must be >= 1 (got {value})")]
    InvalidSize {
        /// What was being sized ("count", "anchors", ...).
        what: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// Explicit positions did not pair up with the supplied colors.
    #[error("Length of positions ({positions}) must match length of colors ({colors})")]
    MismatchedAnchorLengths {
        /// Number of positions supplied.
        positions: usize,
        /// Number of colors supplied.
        colors: usize,
    },

    /// `to_rgb` was called on a space that has no conversion yet.
    #[error("Conversion from {space} to RGB is not implemented")]
    UnimplementedColorSpace {
        /// Display name of the color space.
        space: &'static str,
    },

    /// A hex color string could not be parsed.
    #[error("Invalid hex color: {input:?}")]
    InvalidHex {
        /// The offending input.
        input: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_out_of_range_integer_message() {
        let err = ColorError::ChannelOutOfRange {
            channel: "red",
            value: 300.0,
            range: ChannelRange::UINT8,
        };
        assert_eq!(
            err.to_string(),
            "300 is out of bounds for the red channel. Expected range: [0, 255]"
        );
    }

    #[test]
    fn test_channel_out_of_range_float_message() {
        let err = ColorError::ChannelOutOfRange {
            channel: "alpha",
            value: 1.5,
            range: ChannelRange::UNIT,
        };
        assert_eq!(
            err.to_string(),
            "1.5 is out of bounds for the alpha channel. Expected range: [0.0, 1.0]"
        );
    }

    #[test]
    fn test_invalid_size_message() {
        let err = ColorError::InvalidSize {
            what: "count",
            value: 0,
        };
        assert_eq!(err.to_string(), "count must be >= 1 (got 0)");
    }

    #[test]
    fn test_mismatched_lengths_message() {
        let err = ColorError::MismatchedAnchorLengths {
            positions: 2,
            colors: 3,
        };
        assert!(err.to_string().contains("(2)"));
        assert!(err.to_string().contains("(3)"));
    }

    #[test]
    fn test_unimplemented_space_message() {
        let err = ColorError::UnimplementedColorSpace { space: "Oklab" };
        assert!(err.to_string().contains("Oklab"));
    }

    #[test]
    fn test_error_debug() {
        let err = ColorError::InvalidHex {
            input: "#zz".to_string(),
        };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidHex"));
    }
}
