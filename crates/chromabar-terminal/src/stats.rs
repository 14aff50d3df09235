//! Throughput and ETA statistics.
//!
//! Time comes from a [`Clock`] so the driver can run against the wall clock
//! in production and a hand-advanced [`ManualClock`] in tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Stats text shown before the first measurement.
pub const INITIAL_STATS: &str = "0.0it/s | ETA ?:??";

/// Shown instead of an ETA of 999 seconds or more.
pub const INFINITE_ETA: &str = "∞";

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and give
/// another to the driver.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Set the reading.
    pub fn set(&self, at: Duration) {
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Rolling `it/s | ETA` text, refreshed every `update_every` frames.
#[derive(Debug, Clone)]
pub struct Throughput {
    update_every: usize,
    last_time: Duration,
    text: String,
}

impl Throughput {
    /// Tracker measuring `update_every` iterations per refresh, starting at
    /// `now`. An `update_every` of zero is treated as one.
    #[must_use]
    pub fn new(update_every: usize, now: Duration) -> Self {
        Self {
            update_every: update_every.max(1),
            last_time: now,
            text: INITIAL_STATS.to_string(),
        }
    }

    /// Iterations per refresh.
    #[must_use]
    pub fn update_every(&self) -> usize {
        self.update_every
    }

    /// Restart from `now` with the initial text.
    pub fn reset(&mut self, now: Duration) {
        self.last_time = now;
        self.text.clear();
        self.text.push_str(INITIAL_STATS);
    }

    /// Whether frame number `frame_count` (1-based) should refresh the text.
    #[must_use]
    pub fn is_due(&self, frame_count: usize, last_frame: bool) -> bool {
        last_frame || frame_count % self.update_every == 0
    }

    /// Refresh the text from the time elapsed since the previous refresh.
    ///
    /// If the clock has not advanced the previous text is kept. The
    /// reference time moves to `now` either way.
    pub fn refresh(&mut self, now: Duration, remaining: usize) -> &str {
        let elapsed = now.saturating_sub(self.last_time).as_secs_f64();
        if elapsed > 0.0 {
            let speed = self.update_every as f64 / elapsed;
            let eta = remaining as f64 / speed;
            self.text = format_stats(speed, eta);
            trace!(speed, eta, "stats refreshed");
        }
        self.last_time = now;
        &self.text
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `"{speed:.1}it/s | ETA {eta}"`, with the ETA in whole seconds below 999
/// and [`INFINITE_ETA`] otherwise.
#[must_use]
pub fn format_stats(speed: f64, eta_secs: f64) -> String {
    if eta_secs < 999.0 {
        format!("{speed:.1}it/s | ETA {eta_secs:.0}s")
    } else {
        format!("{speed:.1}it/s | ETA {INFINITE_ETA}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        assert_eq!(format_stats(12.345, 7.6), "12.3it/s | ETA 8s");
        assert_eq!(format_stats(0.5, 1000.0), "0.5it/s | ETA ∞");
        assert_eq!(format_stats(1.0, f64::INFINITY), "1.0it/s | ETA ∞");
    }

    #[test]
    fn test_initial_text() {
        let t = Throughput::new(1, Duration::ZERO);
        assert_eq!(t.text(), INITIAL_STATS);
    }

    #[test]
    fn test_refresh_computes_speed_and_eta() {
        let mut t = Throughput::new(2, Duration::ZERO);
        // 2 iterations in 0.5s is 4 it/s
        let text = t.refresh(Duration::from_millis(500), 10).to_string();
        assert!(text.starts_with("4.0it/s | ETA "));
        let mut t = Throughput::new(1, Duration::ZERO);
        assert_eq!(t.refresh(Duration::from_millis(250), 12), "4.0it/s | ETA 3s");
    }

    #[test]
    fn test_zero_elapsed_keeps_text() {
        let mut t = Throughput::new(1, Duration::from_secs(1));
        assert_eq!(t.refresh(Duration::from_secs(1), 5), INITIAL_STATS);
        assert_eq!(t.refresh(Duration::from_secs(2), 5), "1.0it/s | ETA 5s");
        assert_eq!(t.refresh(Duration::from_secs(2), 4), "1.0it/s | ETA 5s");
    }

    #[test]
    fn test_is_due() {
        let t = Throughput::new(3, Duration::ZERO);
        assert!(!t.is_due(1, false));
        assert!(t.is_due(3, false));
        assert!(t.is_due(4, true));
    }

    #[test]
    fn test_reset() {
        let mut t = Throughput::new(1, Duration::ZERO);
        let _ = t.refresh(Duration::from_secs(1), 1);
        t.reset(Duration::from_secs(5));
        assert_eq!(t.text(), INITIAL_STATS);
        assert_eq!(t.refresh(Duration::from_secs(6), 0), "1.0it/s | ETA 0s");
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(30));
        assert_eq!(clock.now(), Duration::from_millis(30));
        handle.set(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
