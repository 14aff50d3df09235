//! Frame Driver.
//!
//! Pulls `iterations + 1` frames out of a [`BarCompositor`], one per
//! progress step from 0 to `iterations` inclusive, and appends the optional
//! counter, percentage and throughput suffixes.
//!
//! A driver is a single-consumer sequence. [`FrameDriver::frames`] borrows
//! it mutably, so only one traversal can be live at a time, and each new
//! traversal starts from a clean cache and a fresh timing baseline.

use crate::compositor::BarCompositor;
use crate::error::Result;
use crate::stats::{Clock, SystemClock, Throughput};
use chromabar_core::{ColorError, ColorSequence};
use std::fmt::Write as _;
use std::iter::FusedIterator;
use tracing::debug;

/// How frames are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    /// Append `it/s | ETA` statistics.
    pub stats: bool,
    /// Refresh statistics every this many frames (at least 1).
    pub update_every: usize,
    /// Append ` {i}/{N}` after the bar.
    pub show_counter: bool,
    /// Append ` ({pct:6.2}%)` after the bar.
    pub show_percentage: bool,
    /// Build every bar string up front instead of on demand.
    pub precompute: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            stats: true,
            update_every: 1,
            show_counter: false,
            show_percentage: false,
            precompute: true,
        }
    }
}

impl DriverOptions {
    /// Bar only, no suffixes.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            stats: false,
            ..Self::default()
        }
    }
}

/// Produces the frames of one progress run.
#[derive(Debug)]
pub struct FrameDriver<C: Clock = SystemClock> {
    iterations: usize,
    compositor: BarCompositor,
    options: DriverOptions,
    throughput: Throughput,
    clock: C,
}

impl FrameDriver<SystemClock> {
    /// Driver over `sequence` timed by the wall clock.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidSize` error if `iterations` or
    /// `options.update_every` is zero.
    pub fn new(iterations: usize, sequence: &ColorSequence, options: DriverOptions) -> Result<Self> {
        Self::with_clock(iterations, sequence, options, SystemClock::new())
    }
}

impl<C: Clock> FrameDriver<C> {
    /// Driver over `sequence` timed by `clock`.
    pub fn with_clock(
        iterations: usize,
        sequence: &ColorSequence,
        options: DriverOptions,
        clock: C,
    ) -> Result<Self> {
        Self::from_compositor(iterations, BarCompositor::new(sequence), options, clock)
    }

    /// Driver over an already configured compositor.
    ///
    /// The compositor is precomputed here when `options.precompute` is set
    /// and it has not been already.
    pub fn from_compositor(
        iterations: usize,
        compositor: BarCompositor,
        options: DriverOptions,
        clock: C,
    ) -> Result<Self> {
        if iterations == 0 {
            return Err(ColorError::InvalidSize {
                what: "iterations",
                value: 0,
            }
            .into());
        }
        if options.update_every == 0 {
            return Err(ColorError::InvalidSize {
                what: "update_every",
                value: 0,
            }
            .into());
        }
        let compositor = if options.precompute && !compositor.is_precomputed() {
            compositor.precompute()
        } else {
            compositor
        };
        debug!(
            iterations,
            size = compositor.size(),
            stats = options.stats,
            update_every = options.update_every,
            "frame driver built"
        );
        let throughput = Throughput::new(options.update_every, clock.now());
        Ok(Self {
            iterations,
            compositor,
            options,
            throughput,
            clock,
        })
    }

    /// Number of progress steps.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Frames per traversal (`iterations + 1`).
    #[must_use]
    pub fn frame_total(&self) -> usize {
        self.iterations + 1
    }

    /// Decoration settings.
    #[must_use]
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// The compositor.
    #[must_use]
    pub fn compositor(&self) -> &BarCompositor {
        &self.compositor
    }

    /// Start a fresh traversal.
    pub fn frames(&mut self) -> Frames<'_, C> {
        self.compositor.reset();
        self.throughput.reset(self.clock.now());
        Frames {
            driver: self,
            next: 0,
            frame_count: 0,
        }
    }

    fn frame(&mut self, step: usize, frame_count: usize) -> String {
        let total = self.iterations;
        let ratio = step as f64 / total as f64;
        let mut frame = String::from(self.compositor.render(ratio));

        if self.options.show_counter {
            let _ = write!(frame, " {step}/{total}");
        }
        if self.options.show_percentage {
            let _ = write!(frame, " ({:6.2}%)", ratio * 100.0);
        }
        if self.options.stats {
            if self.throughput.is_due(frame_count, step == total) {
                let _ = self.throughput.refresh(self.clock.now(), total - step);
            }
            frame.push_str(" | ");
            frame.push_str(self.throughput.text());
        }
        frame
    }
}

impl<'a, C: Clock> IntoIterator for &'a mut FrameDriver<C> {
    type Item = String;
    type IntoIter = Frames<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames()
    }
}

/// One traversal of a [`FrameDriver`].
#[derive(Debug)]
pub struct Frames<'a, C: Clock = SystemClock> {
    driver: &'a mut FrameDriver<C>,
    next: usize,
    frame_count: usize,
}

impl<C: Clock> Iterator for Frames<'_, C> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.driver.iterations {
            return None;
        }
        let step = self.next;
        self.next += 1;
        self.frame_count += 1;
        Some(self.driver.frame(step, self.frame_count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.driver.frame_total().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<C: Clock> ExactSizeIterator for Frames<'_, C> {}

impl<C: Clock> FusedIterator for Frames<'_, C> {}
