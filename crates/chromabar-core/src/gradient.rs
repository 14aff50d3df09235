//! Continuous gradients over anchor sets.

use crate::anchor::{Anchor, AnchorSet, Bracket};
use crate::color::DisplayColor;
use crate::error::Result;

/// Piecewise-linear gradient between position-sorted anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    anchors: AnchorSet,
}

impl Gradient {
    /// Gradient through `colors`, spread evenly over [0, 1].
    pub fn new(colors: Vec<DisplayColor>) -> Result<Self> {
        Ok(Self {
            anchors: AnchorSet::evenly_spaced(colors)?,
        })
    }

    /// Two-color gradient.
    pub fn two(start: DisplayColor, end: DisplayColor) -> Self {
        Self {
            anchors: AnchorSet::from_sorted_pair(start, end),
        }
    }

    /// Gradient through `colors` pinned at `positions`.
    pub fn with_positions(colors: Vec<DisplayColor>, positions: Vec<f64>) -> Result<Self> {
        Ok(Self {
            anchors: AnchorSet::with_positions(colors, positions)?,
        })
    }

    /// Gradient through prebuilt anchors.
    pub fn from_anchors(anchors: Vec<Anchor>) -> Result<Self> {
        Ok(Self {
            anchors: AnchorSet::from_anchors(anchors)?,
        })
    }

    /// The sorted anchor set.
    #[must_use]
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Sample the gradient at position `t`.
    ///
    /// Positions outside the anchor span clamp to the end colors. Two
    /// anchors sharing a position yield the later one.
    #[must_use]
    pub fn sample(&self, t: f64) -> DisplayColor {
        match self.anchors.bracket(t) {
            Bracket::Exact(anchor) => anchor.color,
            Bracket::Between(lower, upper) => {
                if upper.position == lower.position {
                    return upper.color;
                }
                let ratio = (t - lower.position) / (upper.position - lower.position);
                lower.color.interpolate(&upper.color, ratio)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use proptest::prelude::*;

    fn red() -> DisplayColor {
        DisplayColor::new(Rgb::RED)
    }

    fn green() -> DisplayColor {
        DisplayColor::new(Rgb::GREEN)
    }

    fn blue() -> DisplayColor {
        DisplayColor::new(Rgb::BLUE)
    }

    #[test]
    fn test_single_anchor_always_same() {
        let g = Gradient::new(vec![blue()]).unwrap();
        assert_eq!(g.sample(0.0), blue());
        assert_eq!(g.sample(0.5), blue());
        assert_eq!(g.sample(1.0), blue());
    }

    #[test]
    fn test_two_color_midpoint() {
        let g = Gradient::two(red(), green());
        assert_eq!(g.sample(0.5), red().interpolate(&green(), 0.5));
        assert_eq!(g.sample(0.0), red());
        assert_eq!(g.sample(1.0), green());
    }

    #[test]
    fn test_clamps_outside_span() {
        let g = Gradient::with_positions(vec![red(), green()], vec![0.25, 0.75]).unwrap();
        assert_eq!(g.sample(0.0), red());
        assert_eq!(g.sample(-3.0), red());
        assert_eq!(g.sample(0.9), green());
        assert_eq!(g.sample(7.0), green());
    }

    #[test]
    fn test_local_ratio_between_anchors() {
        let g = Gradient::with_positions(vec![red(), green()], vec![0.25, 0.75]).unwrap();
        // 0.375 is a quarter of the way from 0.25 to 0.75
        assert_eq!(g.sample(0.375), red().interpolate(&green(), 0.25));
    }

    #[test]
    fn test_three_stops() {
        let g = Gradient::new(vec![red(), green(), blue()]).unwrap();
        assert_eq!(g.sample(0.5), green());
        assert_eq!(g.sample(0.75), green().interpolate(&blue(), 0.5));
    }

    #[test]
    fn test_duplicate_positions_take_later() {
        let g = Gradient::with_positions(
            vec![red(), green(), blue(), red()],
            vec![0.0, 0.5, 0.5, 1.0],
        )
        .unwrap();
        // Below the shared position the span ends at the first 0.5 anchor,
        // above it the span starts at the second.
        assert_eq!(g.sample(0.25), red().interpolate(&green(), 0.5));
        assert_eq!(g.sample(0.75), blue().interpolate(&red(), 0.5));
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let g = Gradient::with_positions(vec![green(), red()], vec![1.0, 0.0]).unwrap();
        assert_eq!(g.sample(0.0), red());
        assert_eq!(g.sample(1.0), green());
    }

    proptest! {
        #[test]
        fn prop_gradient_boundaries(
            p1 in 0.0f64..=1.0,
            p2 in 0.0f64..=1.0,
            below in -2.0f64..0.0,
            above in 0.0f64..2.0,
        ) {
            prop_assume!(p1 != p2);
            let g = Gradient::with_positions(vec![red(), blue()], vec![p1, p2]).unwrap();
            let a = g.anchors().anchors();
            let (first, last) = (a[0], a[a.len() - 1]);
            prop_assert_eq!(g.sample(first.position), first.color);
            prop_assert_eq!(g.sample(last.position), last.color);
            prop_assert_eq!(g.sample(first.position + below), first.color);
            prop_assert_eq!(g.sample(last.position + above), last.color);
        }
    }
}
