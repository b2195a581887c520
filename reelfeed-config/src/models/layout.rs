use reelfeed_model::Viewport;
use serde::{Deserialize, Serialize};

/// Page geometry for the simulated feed, in CSS pixels.
///
/// The feed is laid out top to bottom as an offset marker, a banner, then
/// one block per category: a title band followed by a horizontally
/// scrolling row of clips.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Height of the zero-size marker above the content. Its bottom edge is
    /// what the header gate watches.
    pub offset_height: f32,
    pub banner_height: f32,
    pub row_title_height: f32,
    pub clip_width: f32,
    pub clip_height: f32,
    /// Horizontal space between clips in a row.
    pub clip_gap: f32,
    /// Vertical space between category blocks.
    pub row_gap: f32,
    /// Left and right inset of each row.
    pub row_padding: f32,
    /// Space below the last row, so it can be scrolled up to the middle.
    pub footer_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 375.0,
            viewport_height: 812.0,
            offset_height: 56.0,
            banner_height: 180.0,
            row_title_height: 48.0,
            clip_width: 160.0,
            clip_height: 240.0,
            clip_gap: 12.0,
            row_gap: 24.0,
            row_padding: 16.0,
            footer_height: 320.0,
        }
    }
}

impl LayoutConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Height of one category block, title band included.
    pub fn block_height(&self) -> f32 {
        self.row_title_height + self.clip_height
    }

    /// Distance between the left edges of neighbouring clips.
    pub fn clip_stride(&self) -> f32 {
        self.clip_width + self.clip_gap
    }

    /// Dimensions that must be strictly positive, with their field names.
    pub(crate) fn positive_dimensions(&self) -> [(&'static str, f32); 4] {
        [
            ("layout.viewport_width", self.viewport_width),
            ("layout.viewport_height", self.viewport_height),
            ("layout.clip_width", self.clip_width),
            ("layout.clip_height", self.clip_height),
        ]
    }

    /// Dimensions that may be zero but never negative.
    pub(crate) fn non_negative_dimensions(&self) -> [(&'static str, f32); 7] {
        [
            ("layout.offset_height", self.offset_height),
            ("layout.banner_height", self.banner_height),
            ("layout.row_title_height", self.row_title_height),
            ("layout.clip_gap", self.clip_gap),
            ("layout.row_gap", self.row_gap),
            ("layout.row_padding", self.row_padding),
            ("layout.footer_height", self.footer_height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let layout: LayoutConfig =
            toml::from_str("viewport_height = 640.0\nclip_gap = 0.0")
                .expect("valid toml");

        assert_eq!(layout.viewport_height, 640.0);
        assert_eq!(layout.clip_gap, 0.0);
        assert_eq!(layout.viewport_width, 375.0);
        assert_eq!(layout.clip_stride(), layout.clip_width);
    }

    #[test]
    fn viewport_matches_configured_size() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.viewport(), Viewport::new(375.0, 812.0));
        assert_eq!(layout.block_height(), 288.0);
    }
}
