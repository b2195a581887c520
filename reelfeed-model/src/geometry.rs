//! Viewport-relative geometry shared by the layout and the scheduler.

use crate::ids::MediaId;

/// Bounding box of an element in viewport coordinates.
///
/// Mirrors what a layout engine reports for a mounted element: `top` and
/// `bottom` grow downwards from the top edge of the viewport, `left` and
/// `right` grow rightwards from its left edge. Values may be negative or
/// exceed the viewport when the element is partially or fully scrolled out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Rect {
    /// Layout of a detached element.
    pub const ZERO: Rect = Rect {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Build from an origin and a size.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            top: y,
            bottom: y + height,
            left: x,
            right: x + width,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Shift by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
            left: self.left + dx,
            right: self.right + dx,
        }
    }
}

/// Size of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Typical phone-sized feed
        Self::new(375.0, 812.0)
    }
}

/// A mounted media element together with its current layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaElement {
    pub id: MediaId,
    pub rect: Rect,
}

impl MediaElement {
    pub fn new(id: impl Into<MediaId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}
