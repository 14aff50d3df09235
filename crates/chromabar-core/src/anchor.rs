//! Position-sorted anchor sets shared by gradients and palettes.

use crate::channel::{validate, ChannelRange};
use crate::color::DisplayColor;
use crate::error::{ColorError, Result};

/// A control point: a color pinned at a position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Position along the bar, in [0, 1].
    pub position: f64,
    /// Color at that position.
    pub color: DisplayColor,
}

impl Anchor {
    /// Create an anchor, validating the position.
    pub fn new(position: f64, color: DisplayColor) -> Result<Self> {
        validate("position", position, ChannelRange::UNIT)?;
        Ok(Self { position, color })
    }
}

/// Where a sample position falls within an anchor set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bracket<'a> {
    /// Clamped to an end, or the set has a single anchor.
    Exact(&'a Anchor),
    /// Strictly inside the span `[lower.position, upper.position]`.
    Between(&'a Anchor, &'a Anchor),
}

/// Non-empty list of anchors sorted ascending by position.
///
/// Sorting is stable, so anchors sharing a position keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
}

impl AnchorSet {
    /// Spread `colors` evenly: anchor `i` sits at `i / (n - 1)`, a lone
    /// anchor at 0.0.
    pub fn evenly_spaced(colors: Vec<DisplayColor>) -> Result<Self> {
        let n = colors.len();
        if n == 0 {
            return Err(ColorError::InvalidSize {
                what: "anchors",
                value: 0,
            });
        }
        let step = if n > 1 { (n - 1) as f64 } else { 1.0 };
        let anchors = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| Anchor {
                position: i as f64 / step,
                color,
            })
            .collect();
        Ok(Self { anchors })
    }

    /// Two anchors at 0.0 and 1.0.
    #[must_use]
    pub fn from_sorted_pair(start: DisplayColor, end: DisplayColor) -> Self {
        Self {
            anchors: vec![
                Anchor {
                    position: 0.0,
                    color: start,
                },
                Anchor {
                    position: 1.0,
                    color: end,
                },
            ],
        }
    }

    /// Pair `colors` with explicit `positions`.
    pub fn with_positions(colors: Vec<DisplayColor>, positions: Vec<f64>) -> Result<Self> {
        if positions.len() != colors.len() {
            return Err(ColorError::MismatchedAnchorLengths {
                positions: positions.len(),
                colors: colors.len(),
            });
        }
        let anchors = positions
            .into_iter()
            .zip(colors)
            .map(|(position, color)| Anchor::new(position, color))
            .collect::<Result<Vec<_>>>()?;
        Self::from_anchors(anchors)
    }

    /// Sort prebuilt anchors. Positions are re-validated.
    pub fn from_anchors(mut anchors: Vec<Anchor>) -> Result<Self> {
        if anchors.is_empty() {
            return Err(ColorError::InvalidSize {
                what: "anchors",
                value: 0,
            });
        }
        for anchor in &anchors {
            validate("position", anchor.position, ChannelRange::UNIT)?;
        }
        anchors.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { anchors })
    }

    /// Number of anchors (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Always false: an anchor set is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anchors in sorted order.
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Anchor `index` in sorted order, wrapping around.
    #[must_use]
    pub fn cyclic(&self, index: usize) -> &Anchor {
        &self.anchors[index % self.anchors.len()]
    }

    /// Locate `t` among the anchors.
    ///
    /// Positions at or before the first anchor clamp to it, at or after the
    /// last clamp to it. Otherwise the upper anchor is the first one (from
    /// index 1) whose position is `>= t`.
    pub(crate) fn bracket(&self, t: f64) -> Bracket<'_> {
        let anchors = &self.anchors;
        let first = &anchors[0];
        let last = &anchors[anchors.len() - 1];

        if anchors.len() == 1 || t <= first.position {
            return Bracket::Exact(first);
        }
        if t >= last.position {
            return Bracket::Exact(last);
        }

        let upper = 1 + anchors[1..].partition_point(|a| a.position < t);
        Bracket::Between(&anchors[upper - 1], &anchors[upper])
    }
}
