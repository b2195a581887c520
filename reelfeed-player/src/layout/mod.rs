//! Geometry of the simulated feed page.
//!
//! Top to bottom: an offset marker, a banner, one block per category (title
//! band plus a row of clips) and a footer. The page scrolls vertically as a whole
//! and each row scrolls horizontally on its own.

pub mod row;

use std::collections::HashMap;

use reelfeed_config::LayoutConfig;
use reelfeed_core::HeaderProbe;
use reelfeed_model::prelude::*;

pub use row::RowScroll;

#[derive(Debug, Clone)]
struct RowLayout {
    key: CategoryKey,
    clips: Vec<MediaId>,
    scroll: RowScroll,
}

#[derive(Debug, Clone)]
pub struct FeedLayout {
    config: LayoutConfig,
    rows: Vec<RowLayout>,
    row_index: HashMap<CategoryKey, usize>,
    scroll_y: f32,
    max_scroll_y: f32,
}

impl FeedLayout {
    pub fn new(catalog: &Catalog, config: LayoutConfig) -> Self {
        let rows: Vec<RowLayout> = catalog
            .iter()
            .map(|category| RowLayout {
                key: category.key.clone(),
                clips: category.ids().cloned().collect(),
                scroll: RowScroll::new(
                    config.viewport_width,
                    row_content_width(&config, category.len()),
                ),
            })
            .collect();
        let row_index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.key.clone(), i))
            .collect();

        let mut layout = Self {
            config,
            rows,
            row_index,
            scroll_y: 0.0,
            max_scroll_y: 0.0,
        };
        layout.max_scroll_y =
            (layout.content_height() - config.viewport_height).max(0.0);
        layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn max_scroll_y(&self) -> f32 {
        self.max_scroll_y
    }

    /// Total page height, from the offset marker to the end of the footer.
    pub fn content_height(&self) -> f32 {
        let n = self.rows.len() as f32;
        let gaps = (n - 1.0).max(0.0) * self.config.row_gap;
        self.rows_top()
            + n * self.config.block_height()
            + gaps
            + self.config.footer_height
    }

    /// Scroll the page vertically. Returns `true` when the offset moved.
    pub fn scroll_feed(&mut self, dy: f32) -> bool {
        let next = (self.scroll_y + dy).clamp(0.0, self.max_scroll_y);
        let moved = (next - self.scroll_y).abs() > f32::EPSILON;
        self.scroll_y = next;
        moved
    }

    /// Scroll one row horizontally. `None` when no row has `key`.
    pub fn scroll_row(&mut self, key: &str, dx: f32) -> Option<bool> {
        let index = *self.row_index.get(key)?;
        Some(self.rows[index].scroll.scroll_by(dx))
    }

    /// Current rect of every clip, in feed order.
    pub fn media_elements(&self) -> Vec<MediaElement> {
        let c = &self.config;
        let mut elements = Vec::with_capacity(
            self.rows.iter().map(|row| row.clips.len()).sum(),
        );
        for (i, row) in self.rows.iter().enumerate() {
            let top = self.row_top(i) + c.row_title_height - self.scroll_y;
            for (j, id) in row.clips.iter().enumerate() {
                let left = c.row_padding + j as f32 * c.clip_stride()
                    - row.scroll.scroll_x;
                elements.push(MediaElement::new(
                    id.clone(),
                    Rect::from_origin(left, top, c.clip_width, c.clip_height),
                ));
            }
        }
        elements
    }

    pub fn element_rect(&self, id: &MediaId) -> Option<Rect> {
        self.media_elements()
            .into_iter()
            .find(|element| &element.id == id)
            .map(|element| element.rect)
    }

    pub fn header_probe(&self) -> HeaderProbe {
        HeaderProbe {
            offset_bottom: self.config.offset_height - self.scroll_y,
            content_top: self.rows_top() - self.scroll_y,
        }
    }

    /// Vertical offset that puts row `key`'s clips across the middle of the
    /// viewport, clamped to the page.
    pub fn offset_centering_row(&self, key: &str) -> Option<f32> {
        let index = *self.row_index.get(key)?;
        let c = &self.config;
        let clip_mid =
            self.row_top(index) + c.row_title_height + c.clip_height / 2.0;
        Some(
            (clip_mid - c.viewport_height / 2.0).clamp(0.0, self.max_scroll_y),
        )
    }

    fn rows_top(&self) -> f32 {
        self.config.offset_height + self.config.banner_height
    }

    fn row_top(&self, index: usize) -> f32 {
        self.rows_top()
            + index as f32 * (self.config.block_height() + self.config.row_gap)
    }
}

fn row_content_width(config: &LayoutConfig, clips: usize) -> f32 {
    if clips == 0 {
        return 0.0;
    }
    let n = clips as f32;
    2.0 * config.row_padding
        + n * config.clip_width
        + (n - 1.0) * config.clip_gap
}
