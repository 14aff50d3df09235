//! Color model and sampling engine for chromabar.
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_const_for_fn)]
//!
//! This crate provides everything a bar needs before it touches a terminal:
//! - Channel validation: [`validate`], [`Channel`], [`ChannelRange`]
//! - Color spaces: [`ColorSpace`] and the concrete types in [`space`]
//! - Resolved terminal colors: [`Rgb`], [`DisplayColor`]
//! - Anchor-based sources: [`Gradient`], [`Palette`]
//! - Fixed-length color lists: [`ColorSequence`]
//!
//! # Example
//!
//! ```
//! use chromabar_core::{ColorSequence, DisplayColor, Gradient, Rgb};
//!
//! let gradient = Gradient::two(DisplayColor::new(Rgb::RED), DisplayColor::new(Rgb::GREEN));
//! let cells = ColorSequence::gradient(gradient, 3).unwrap().to_vec();
//! assert_eq!(cells[0].to_string(), "38;2;255;0;0");
//! assert_eq!(cells[2].to_string(), "38;2;0;255;0");
//! ```

mod anchor;
mod channel;
mod color;
mod error;
mod gradient;
mod palette;
mod sequence;
pub mod space;

pub use anchor::{Anchor, AnchorSet};
pub use channel::{validate, Channel, ChannelRange};
pub use color::{DisplayColor, Rgb};
pub use error::{ColorError, Result};
pub use gradient::Gradient;
pub use palette::Palette;
pub use sequence::{ColorSequence, ColorSource, Iter, PaletteMode};
pub use space::{ColorSpace, Srgb};
