//! In-memory render tree backing the scheduler in the simulated host.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use reelfeed_core::{HeaderProbe, MediaHandle, MediaSurface};
use reelfeed_model::{Catalog, MediaElement, MediaId, Viewport};
use url::Url;

use crate::layout::FeedLayout;

/// Playback state of one simulated `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoElement {
    pub id: MediaId,
    pub src: Url,
    pub playing: bool,
    pub position_ms: u64,
    pub plays: u32,
    pub pauses: u32,
    pub rewinds: u32,
}

impl VideoElement {
    pub fn new(id: MediaId, src: Url) -> Self {
        Self {
            id,
            src,
            playing: false,
            position_ms: 0,
            plays: 0,
            pauses: 0,
            rewinds: 0,
        }
    }

    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }

    fn seek_to_start(&mut self) {
        self.position_ms = 0;
        self.rewinds += 1;
    }

    fn advance(&mut self, ms: u64) {
        if self.playing {
            self.position_ms += ms;
        }
    }
}

/// Shared handle to a mounted element.
#[derive(Debug, Clone)]
pub struct VideoHandle(Arc<Mutex<VideoElement>>);

impl MediaHandle for VideoHandle {
    fn play(&self) {
        self.0.lock().play();
    }

    fn pause(&self) {
        self.0.lock().pause();
    }

    fn seek_to_start(&self) {
        self.0.lock().seek_to_start();
    }
}

/// Simulated page: the layout plus an id index of mounted elements.
///
/// Cloning is cheap and every clone sees the same page, so one copy can move
/// into the feed driver while the host keeps scrolling another.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    layout: Arc<RwLock<FeedLayout>>,
    elements: Arc<RwLock<HashMap<MediaId, VideoHandle>>>,
}

impl SimulatedSurface {
    pub fn new(catalog: &Catalog, layout: FeedLayout) -> Self {
        let elements = catalog
            .clips()
            .map(|clip| {
                let element =
                    VideoElement::new(clip.id.clone(), clip.src.clone());
                let handle = VideoHandle(Arc::new(Mutex::new(element)));
                (clip.id.clone(), handle)
            })
            .collect();
        Self {
            layout: Arc::new(RwLock::new(layout)),
            elements: Arc::new(RwLock::new(elements)),
        }
    }

    pub fn scroll_feed(&self, dy: f32) -> bool {
        self.layout.write().scroll_feed(dy)
    }

    pub fn scroll_row(&self, key: &str, dx: f32) -> Option<bool> {
        self.layout.write().scroll_row(key, dx)
    }

    /// Read access to the current layout.
    pub fn with_layout<R>(&self, f: impl FnOnce(&FeedLayout) -> R) -> R {
        f(&self.layout.read())
    }

    /// Remove an element from the index, as if its row were unmounted.
    pub fn detach(&self, id: &MediaId) -> Option<VideoElement> {
        self.elements
            .write()
            .remove(id)
            .map(|handle| handle.0.lock().clone())
    }

    pub fn element(&self, id: &str) -> Option<VideoElement> {
        self.elements
            .read()
            .get(id)
            .map(|handle| handle.0.lock().clone())
    }

    /// Ids of elements that are currently playing, in feed order.
    pub fn playing_ids(&self) -> Vec<MediaId> {
        let elements = self.elements.read();
        self.layout
            .read()
            .media_elements()
            .into_iter()
            .filter(|el| {
                elements
                    .get(&el.id)
                    .is_some_and(|handle| handle.0.lock().playing)
            })
            .map(|el| el.id)
            .collect()
    }

    /// Let simulated wall-clock time pass for every playing element.
    pub fn advance(&self, ms: u64) {
        for handle in self.elements.read().values() {
            handle.0.lock().advance(ms);
        }
    }
}

impl MediaSurface for SimulatedSurface {
    type Handle = VideoHandle;

    fn resolve(&self, ids: &[MediaId]) -> Vec<VideoHandle> {
        let elements = self.elements.read();
        ids.iter().filter_map(|id| elements.get(id).cloned()).collect()
    }

    fn media_elements(&self) -> Vec<MediaElement> {
        let elements = self.elements.read();
        self.layout
            .read()
            .media_elements()
            .into_iter()
            .filter(|el| elements.contains_key(&el.id))
            .collect()
    }

    fn viewport(&self) -> Viewport {
        self.layout.read().viewport()
    }

    fn header_probe(&self) -> Option<HeaderProbe> {
        Some(self.layout.read().header_probe())
    }
}
