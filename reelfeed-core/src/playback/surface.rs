//! The seam between the scheduler and whatever renders the feed.

use reelfeed_model::{MediaElement, MediaId, Viewport};

/// A live, playable element resolved from the render tree.
///
/// Handles are resolved on demand and dropped after each operation; they
/// must not be held across renders.
pub trait MediaHandle {
    /// Start or resume playback from the current position.
    fn play(&self);
    /// Pause without moving the playhead.
    fn pause(&self);
    /// Rewind playback to the first frame.
    fn seek_to_start(&self);
}

/// Layout of the two reference elements used for header visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderProbe {
    /// Bottom edge of the offset marker at the top of the scroll view.
    pub offset_bottom: f32,
    /// Top edge of the content container.
    pub content_top: f32,
}

/// Render tree access required by the scheduler.
pub trait MediaSurface {
    /// Playable element handed back by [`MediaSurface::resolve`].
    type Handle: MediaHandle;

    /// Resolve every id in a single batched lookup. Ids with no mounted
    /// element are omitted; duplicates may resolve more than once.
    fn resolve(&self, ids: &[MediaId]) -> Vec<Self::Handle>;

    /// Every media element currently mounted, with its current layout.
    fn media_elements(&self) -> Vec<MediaElement>;

    /// Current size of the scroll viewport.
    fn viewport(&self) -> Viewport;

    /// `None` while either reference element is not mounted.
    fn header_probe(&self) -> Option<HeaderProbe> {
        None
    }
}

/// Build one attribute selector matching all `ids`, e.g.
/// `[data-video-id="v1"],[data-video-id="v2"]`, so DOM-backed surfaces can
/// resolve a batch with a single query.
pub fn selector_for(ids: &[MediaId], attribute: &str) -> String {
    let mut selector = String::with_capacity(ids.len() * (attribute.len() + 16));
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            selector.push(',');
        }
        selector.push('[');
        selector.push_str(attribute);
        selector.push_str("=\"");
        for ch in id.as_str().chars() {
            if ch == '"' || ch == '\\' {
                selector.push('\\');
            }
            selector.push(ch);
        }
        selector.push_str("\"]");
    }
    selector
}
