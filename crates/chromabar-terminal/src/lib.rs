//! Terminal progress bar rendering for chromabar.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)] // "variables can be used directly in format!"
#![allow(clippy::struct_excessive_bools)] // "more than 3 bools in struct"
#![allow(clippy::doc_markdown)] // "item in documentation missing backticks"
//!
//! This crate turns a [`ColorSequence`](chromabar_core::ColorSequence) into
//! terminal output:
//!
//! - [`BarCompositor`] renders a fill ratio with eighth-cell precision
//! - [`FrameDriver`] walks a run from 0 to N and decorates each frame
//! - [`BarConfig`] loads all of the above from TOML
//!
//! # Example
//!
//! ```
//! use chromabar_core::{ColorSequence, DisplayColor, Rgb};
//! use chromabar_terminal::{DriverOptions, FrameDriver};
//!
//! let cells = ColorSequence::constant(DisplayColor::new(Rgb::RED), 1).unwrap();
//! let mut driver = FrameDriver::new(2, &cells, DriverOptions::bare()).unwrap();
//! let frames: Vec<String> = driver.frames().collect();
//! assert_eq!(frames[1], "\x1b[38;2;255;0;0m▌\x1b[0m");
//! ```
//!
//! Drivers are single-consumer: a traversal borrows the driver mutably.

mod compositor;
mod config;
mod driver;
mod error;
pub mod stats;
pub mod symbols;

pub use compositor::BarCompositor;
pub use config::{BarConfig, ColorsConfig};
pub use driver::{DriverOptions, FrameDriver, Frames};
pub use error::{BarError, Result};
pub use stats::{Clock, ManualClock, SystemClock, Throughput};
