//! Geometry probe: does an element count as "in view"?
//!
//! An element is hit when the activation line (a horizontal line at a fixed
//! fraction of the viewport height) passes strictly through its vertical
//! extent and its full horizontal extent lies strictly inside the viewport.
//! Results are never cached; layout changes continuously while scrolling.

use reelfeed_model::{Rect, Viewport};

use crate::constants::DEFAULT_ACTIVATION_RATIO;

/// Horizontal line used to pick which clips auto-play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationLine {
    ratio: f32,
}

impl Default for ActivationLine {
    fn default() -> Self {
        Self::CENTER
    }
}

impl ActivationLine {
    /// Line across the vertical middle of the viewport.
    pub const CENTER: Self = Self {
        ratio: DEFAULT_ACTIVATION_RATIO,
    };

    /// Create a line at `ratio` of the viewport height. Ratios outside the
    /// open interval (0, 1) fall back to the centre line.
    pub fn new(ratio: f32) -> Self {
        if ratio > 0.0 && ratio < 1.0 {
            Self { ratio }
        } else {
            log::warn!(
                "activation ratio {ratio} outside (0, 1); using {DEFAULT_ACTIVATION_RATIO}"
            );
            Self::CENTER
        }
    }

    /// Line position as a fraction of viewport height.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Vertical position of the line in viewport coordinates.
    #[inline]
    pub fn y(&self, viewport: &Viewport) -> f32 {
        viewport.height * self.ratio
    }

    /// True when the element straddles the line and is fully contained
    /// horizontally.
    pub fn hits(&self, rect: &Rect, viewport: &Viewport) -> bool {
        horizontally_contained(rect, viewport)
            && self.straddled_by(rect, viewport)
    }

    /// Strict straddle test; an edge resting on the line is not a hit.
    #[inline]
    pub fn straddled_by(&self, rect: &Rect, viewport: &Viewport) -> bool {
        let line = self.y(viewport);
        rect.top < line && line < rect.bottom
    }
}

/// Strict containment within `(0, viewport.width)`; elements wider than the
/// viewport never qualify.
#[inline]
pub fn horizontally_contained(rect: &Rect, viewport: &Viewport) -> bool {
    rect.left > 0.0 && rect.right < viewport.width
}

/// In-view test against the centre activation line.
pub fn is_in_view(rect: &Rect, viewport: &Viewport) -> bool {
    ActivationLine::CENTER.hits(rect, viewport)
}
