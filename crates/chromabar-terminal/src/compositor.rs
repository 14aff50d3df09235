//! Bar Compositor.
//!
//! Maps a progress ratio onto a discrete fill level in eighths of a cell
//! and composes the colored string for that level. Composition is the only
//! expensive step, so the compositor either remembers the last level it
//! built (lazy mode) or builds the whole `0..=8 * size` table up front
//! (precomputed mode). Both return byte-identical strings.

use crate::symbols::{partial_block, EIGHTHS, FULL_BLOCK, RESET, UNFILLED, UNFILLED_COLOR};
use chromabar_core::{ColorSequence, DisplayColor};
use tracing::{debug, trace};

/// Nudges products like `8 * 1.0` past float underflow before flooring.
const FILL_EPSILON: f64 = 1e-9;

/// Sub-character progress bar renderer.
///
/// Not thread-safe: `render` mutates the last-level cache.
#[derive(Debug, Clone)]
pub struct BarCompositor {
    cells: Vec<DisplayColor>,
    prefixes: Vec<String>,
    unfilled: String,
    table: Option<Vec<String>>,
    last_level: Option<usize>,
    last_frame: String,
}

impl BarCompositor {
    /// Lazy compositor with one cell per color in `sequence`.
    #[must_use]
    pub fn new(sequence: &ColorSequence) -> Self {
        let cells = sequence.to_vec();
        let prefixes = cells.iter().map(DisplayColor::escape).collect();
        debug!(size = cells.len(), "bar compositor built");
        Self {
            cells,
            prefixes,
            unfilled: format!("{UNFILLED_COLOR}{UNFILLED}"),
            table: None,
            last_level: None,
            last_frame: String::new(),
        }
    }

    /// Replace the glyph drawn for unfilled cells.
    ///
    /// Drops any precomputed table; call [`precompute`](Self::precompute)
    /// afterwards if one is wanted.
    #[must_use]
    pub fn with_unfilled_glyph(mut self, glyph: char) -> Self {
        self.unfilled = format!("{UNFILLED_COLOR}{glyph}");
        self.table = None;
        self.last_level = None;
        self
    }

    /// Build every fill level now so `render` is a table lookup.
    #[must_use]
    pub fn precompute(mut self) -> Self {
        let table: Vec<String> = (0..=self.bins()).map(|level| self.compose(level)).collect();
        debug!(levels = table.len(), "bar table precomputed");
        self.table = Some(table);
        self
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Number of discrete fill levels above empty (`8 * size`).
    #[must_use]
    pub fn bins(&self) -> usize {
        self.cells.len() * EIGHTHS
    }

    /// Resolved cell colors.
    #[must_use]
    pub fn cells(&self) -> &[DisplayColor] {
        &self.cells
    }

    /// Whether the full table has been built.
    #[must_use]
    pub fn is_precomputed(&self) -> bool {
        self.table.is_some()
    }

    /// Fill level for `ratio`, in `0..=bins`.
    ///
    /// The ratio is clamped to [0, 1]; NaN counts as empty.
    #[must_use]
    pub fn fill_level(&self, ratio: f64) -> usize {
        if ratio.is_nan() {
            return 0;
        }
        let bins = self.bins();
        let level = (bins as f64 * ratio.clamp(0.0, 1.0) + FILL_EPSILON).floor() as usize;
        level.min(bins)
    }

    /// Rendered bar for `ratio`.
    pub fn render(&mut self, ratio: f64) -> &str {
        let level = self.fill_level(ratio);
        self.render_level(level)
    }

    /// Rendered bar for an explicit fill level (clamped to `bins`).
    pub fn render_level(&mut self, level: usize) -> &str {
        let level = level.min(self.bins());
        if let Some(table) = &self.table {
            return &table[level];
        }
        if self.last_level != Some(level) {
            trace!(level, "bar cache miss");
            self.last_frame = self.compose(level);
            self.last_level = Some(level);
        }
        &self.last_frame
    }

    /// Forget the last rendered level.
    pub fn reset(&mut self) {
        self.last_level = None;
        self.last_frame.clear();
    }

    fn compose(&self, level: usize) -> String {
        let size = self.size();
        let mut out = String::with_capacity(size * (self.unfilled.len() + 24) + RESET.len());

        if level == 0 {
            for _ in 0..size {
                out.push_str(&self.unfilled);
            }
            out.push_str(RESET);
            return out;
        }

        let whole = (level / EIGHTHS).min(size);
        let eighths = if whole == size { 0 } else { level % EIGHTHS };

        let mut had_background = false;
        for index in 0..whole {
            self.push_cell(&mut out, index, FULL_BLOCK, &mut had_background);
        }
        let mut filled = whole;
        if eighths > 0 {
            self.push_cell(&mut out, whole, partial_block(eighths), &mut had_background);
            filled += 1;
        }

        if filled < size {
            out.push_str(RESET);
            for _ in filled..size {
                out.push_str(&self.unfilled);
            }
        }
        out.push_str(RESET);
        out
    }

    fn push_cell(&self, out: &mut String, index: usize, glyph: char, had_background: &mut bool) {
        let has_background = self.cells[index].background.is_some();
        // A foreground-only code does not clear a background set earlier.
        if *had_background && !has_background {
            out.push_str(RESET);
        }
        *had_background = has_background;
        out.push_str(&self.prefixes[index]);
        out.push(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromabar_core::{Gradient, Palette, PaletteMode, Rgb};
    use proptest::prelude::*;

    fn red() -> DisplayColor {
        DisplayColor::new(Rgb::RED)
    }

    fn constant(size: usize) -> BarCompositor {
        BarCompositor::new(&ColorSequence::constant(red(), size).unwrap())
    }

    fn unfilled() -> String {
        format!("{UNFILLED_COLOR}{UNFILLED}")
    }

    #[test]
    fn test_half_cell() {
        let mut bar = constant(1);
        assert_eq!(bar.fill_level(0.5), 4);
        assert_eq!(bar.render(0.5), "\x1b[38;2;255;0;0m▌\x1b[0m");
    }

    #[test]
    fn test_empty_bar() {
        let mut bar = constant(3);
        assert_eq!(bar.render(0.0), format!("{}{RESET}", unfilled().repeat(3)));
    }

    #[test]
    fn test_full_bar() {
        let mut bar = constant(2);
        assert_eq!(bar.fill_level(1.0), 16);
        assert_eq!(
            bar.render(1.0),
            "\x1b[38;2;255;0;0m█\x1b[38;2;255;0;0m█\x1b[0m"
        );
    }

    #[test]
    fn test_partial_then_unfilled() {
        let mut bar = constant(3);
        // 11 eighths: one whole cell, three eighths, one unfilled cell.
        let expected = format!(
            "\x1b[38;2;255;0;0m█\x1b[38;2;255;0;0m▍{RESET}{}{RESET}",
            unfilled()
        );
        assert_eq!(bar.render_level(11), expected);
    }

    #[test]
    fn test_whole_cells_only() {
        let mut bar = constant(2);
        let expected = format!("\x1b[38;2;255;0;0m█{RESET}{}{RESET}", unfilled());
        assert_eq!(bar.render(0.5), expected);
    }

    #[test]
    fn test_ratio_clamped() {
        let bar = constant(4);
        assert_eq!(bar.fill_level(-1.0), 0);
        assert_eq!(bar.fill_level(2.0), 32);
        assert_eq!(bar.fill_level(f64::NAN), 0);
    }

    #[test]
    fn test_exact_boundaries_not_underflowed() {
        let bar = constant(50);
        for i in 0..=100u32 {
            let ratio = f64::from(i) / 100.0;
            assert_eq!(bar.fill_level(ratio), (i * 4) as usize);
        }
    }

    #[test]
    fn test_each_cell_uses_its_color() {
        let seq = ColorSequence::palette(
            Palette::new(vec![red(), DisplayColor::new(Rgb::BLUE)]).unwrap(),
            PaletteMode::Repeat,
            2,
        )
        .unwrap();
        let mut bar = BarCompositor::new(&seq);
        assert_eq!(
            bar.render(1.0),
            "\x1b[38;2;255;0;0m█\x1b[38;2;0;0;255m█\x1b[0m"
        );
    }

    #[test]
    fn test_reset_after_background_cell() {
        let seq = ColorSequence::palette(
            Palette::new(vec![DisplayColor::with_background(Rgb::RED, Rgb::BLACK), red()])
                .unwrap(),
            PaletteMode::Repeat,
            2,
        )
        .unwrap();
        let mut bar = BarCompositor::new(&seq);
        assert_eq!(
            bar.render(1.0),
            "\x1b[38;2;255;0;0;48;2;0;0;0m█\x1b[0m\x1b[38;2;255;0;0m█\x1b[0m"
        );
    }

    #[test]
    fn test_custom_unfilled_glyph() {
        let mut bar = constant(2).with_unfilled_glyph('-');
        assert_eq!(
            bar.render(0.0),
            format!("{UNFILLED_COLOR}-{UNFILLED_COLOR}-{RESET}")
        );
    }

    #[test]
    fn test_precomputed_matches_lazy() {
        let seq = ColorSequence::gradient(
            Gradient::two(red(), DisplayColor::with_background(Rgb::GREEN, Rgb::WHITE)),
            5,
        )
        .unwrap();
        let mut lazy = BarCompositor::new(&seq);
        let mut table = BarCompositor::new(&seq).precompute();
        assert!(table.is_precomputed());
        for level in 0..=lazy.bins() {
            assert_eq!(lazy.render_level(level), table.render_level(level));
        }
    }

    #[test]
    fn test_reset_forgets_cache() {
        let mut bar = constant(2);
        let first = bar.render(0.3).to_string();
        bar.reset();
        assert_eq!(bar.render(0.3), first);
    }

    proptest! {
        #[test]
        fn prop_fill_level_monotonic(size in 1usize..64, a in -0.5f64..1.5, b in -0.5f64..1.5) {
            let bar = constant(size);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bar.fill_level(lo) <= bar.fill_level(hi));
            prop_assert!(bar.fill_level(hi) <= bar.bins());
        }

        #[test]
        fn prop_cache_transparent(size in 1usize..32, ratio in 0.0f64..=1.0, other in 0.0f64..=1.0) {
            let seq = ColorSequence::constant(red(), size).unwrap();
            let mut fresh = BarCompositor::new(&seq);
            let expected = fresh.render(ratio).to_string();

            let mut warm = BarCompositor::new(&seq);
            let _ = warm.render(other);
            let first = warm.render(ratio).to_string();
            let second = warm.render(ratio).to_string();
            prop_assert_eq!(&first, &expected);
            prop_assert_eq!(&second, &expected);
        }
    }
}
