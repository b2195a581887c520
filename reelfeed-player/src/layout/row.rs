//! RowScroll: horizontal scroll state of one category row

/// Horizontal scroll position of a single row, clamped to its content.
#[derive(Debug, Clone, PartialEq)]
pub struct RowScroll {
    pub viewport_width: f32,
    pub content_width: f32,
    pub scroll_x: f32,
    pub max_scroll: f32,
}

impl RowScroll {
    pub fn new(viewport_width: f32, content_width: f32) -> Self {
        let mut row = Self {
            viewport_width,
            content_width,
            scroll_x: 0.0,
            max_scroll: 0.0,
        };
        row.recompute_max_scroll();
        row
    }

    /// Set the absolute offset. Returns `true` when the offset moved.
    pub fn set_scroll_x(&mut self, x: f32) -> bool {
        let clamped = x.clamp(0.0, self.max_scroll);
        let moved = (clamped - self.scroll_x).abs() > f32::EPSILON;
        self.scroll_x = clamped;
        moved
    }

    /// Scroll by a relative amount. Returns `true` when the offset moved.
    pub fn scroll_by(&mut self, dx: f32) -> bool {
        self.set_scroll_x(self.scroll_x + dx)
    }

    fn recompute_max_scroll(&mut self) {
        self.max_scroll = if self.content_width > self.viewport_width {
            self.content_width - self.viewport_width
        } else {
            0.0
        };
    }
}
