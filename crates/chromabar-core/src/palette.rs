//! Discrete palettes over anchor sets.

use crate::anchor::{Anchor, AnchorSet, Bracket};
use crate::color::DisplayColor;
use crate::error::Result;

/// Nearest-anchor color selection. Never blends.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    anchors: AnchorSet,
}

impl Palette {
    /// Palette of `colors`, spread evenly over [0, 1].
    pub fn new(colors: Vec<DisplayColor>) -> Result<Self> {
        Ok(Self {
            anchors: AnchorSet::evenly_spaced(colors)?,
        })
    }

    /// Palette of `colors` pinned at `positions`.
    pub fn with_positions(colors: Vec<DisplayColor>, positions: Vec<f64>) -> Result<Self> {
        Ok(Self {
            anchors: AnchorSet::with_positions(colors, positions)?,
        })
    }

    /// Palette over prebuilt anchors.
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

    /// Color of the anchor nearest to `t`.
    ///
    /// When `t` is equidistant from its two neighbours the later anchor
    /// wins.
    #[must_use]
    pub fn sample(&self, t: f64) -> DisplayColor {
        match self.anchors.bracket(t) {
            Bracket::Exact(anchor) => anchor.color,
            Bracket::Between(lower, upper) => {
                if (t - lower.position).abs() < (upper.position - t).abs() {
                    lower.color
                } else {
                    upper.color
                }
            }
        }
    }

    /// Anchor color at `index` in sorted order, wrapping around.
    #[must_use]
    pub fn cyclic(&self, index: usize) -> DisplayColor {
        self.anchors.cyclic(index).color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use proptest::prelude::*;

    fn c(v: u8) -> DisplayColor {
        DisplayColor::new(Rgb::new(v, 0, 0))
    }

    #[test]
    fn test_nearest_anchor() {
        let p = Palette::new(vec![c(0), c(1), c(2)]).unwrap();
        assert_eq!(p.sample(0.1), c(0));
        assert_eq!(p.sample(0.3), c(1));
        assert_eq!(p.sample(0.7), c(1));
        assert_eq!(p.sample(0.8), c(2));
    }

    #[test]
    fn test_tie_goes_to_later() {
        let p = Palette::with_positions(vec![c(0), c(1)], vec![0.0, 1.0]).unwrap();
        assert_eq!(p.sample(0.5), c(1));
        let p = Palette::new(vec![c(0), c(1), c(2)]).unwrap();
        assert_eq!(p.sample(0.25), c(1));
        assert_eq!(p.sample(0.75), c(2));
    }

    #[test]
    fn test_clamps_to_ends() {
        let p = Palette::with_positions(vec![c(4), c(5)], vec![0.3, 0.6]).unwrap();
        assert_eq!(p.sample(0.0), c(4));
        assert_eq!(p.sample(1.0), c(5));
    }

    #[test]
    fn test_single_anchor() {
        let p = Palette::new(vec![c(9)]).unwrap();
        assert_eq!(p.sample(0.0), c(9));
        assert_eq!(p.sample(0.99), c(9));
    }

    #[test]
    fn test_cyclic_wraps() {
        let p = Palette::new(vec![c(0), c(1), c(2)]).unwrap();
        let picks: Vec<_> = (0..5).map(|k| p.cyclic(k)).collect();
        assert_eq!(picks, vec![c(0), c(1), c(2), c(0), c(1)]);
    }

    proptest! {
        #[test]
        fn prop_palette_discreteness(
            values in proptest::collection::vec(any::<u8>(), 1..8),
            t in -0.5f64..1.5,
        ) {
            let colors: Vec<_> = values.iter().copied().map(c).collect();
            let p = Palette::new(colors.clone()).unwrap();
            prop_assert!(colors.contains(&p.sample(t)));
        }
    }
}
