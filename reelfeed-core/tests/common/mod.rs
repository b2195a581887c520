#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reelfeed_core::{HeaderProbe, MediaHandle, MediaSurface};
use reelfeed_model::{MediaElement, MediaId, Rect, Viewport};

pub const VIEWPORT: Viewport = Viewport::new(375.0, 800.0);

/// Rect straddling the activation line of [`VIEWPORT`].
pub const HIT: Rect = Rect::new(300.0, 500.0, 20.0, 180.0);
/// Rect well below the activation line.
pub const BELOW: Rect = Rect::new(600.0, 900.0, 20.0, 180.0);
/// Rect above the activation line.
pub const ABOVE: Rect = Rect::new(-100.0, 100.0, 20.0, 180.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Play(String),
    Pause(String),
    Seek(String),
}

pub fn play(id: &str) -> Op {
    Op::Play(id.into())
}

pub fn pause(id: &str) -> Op {
    Op::Pause(id.into())
}

pub fn seek(id: &str) -> Op {
    Op::Seek(id.into())
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Arc<Mutex<Vec<Op>>>,
    resolves: Arc<AtomicUsize>,
}

impl Recorder {
    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    /// Return and clear the recorded ops.
    pub fn take(&self) -> Vec<Op> {
        std::mem::take(&mut *self.ops.lock().unwrap())
    }

    pub fn resolves(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    fn push(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }
}

#[derive(Debug, Clone)]
pub struct StubHandle {
    id: MediaId,
    recorder: Recorder,
}

impl MediaHandle for StubHandle {
    fn play(&self) {
        self.recorder.push(Op::Play(self.id.to_string()));
    }

    fn pause(&self) {
        self.recorder.push(Op::Pause(self.id.to_string()));
    }

    fn seek_to_start(&self) {
        self.recorder.push(Op::Seek(self.id.to_string()));
    }
}

/// Layout shared between a test and a surface moved into the driver.
#[derive(Debug, Default)]
pub struct StubLayout {
    pub elements: Vec<MediaElement>,
    pub header: Option<HeaderProbe>,
}

#[derive(Debug, Clone, Default)]
pub struct StubSurface {
    pub layout: Arc<Mutex<StubLayout>>,
    pub recorder: Recorder,
}

impl StubSurface {
    pub fn with_elements(elements: &[(&str, Rect)]) -> Self {
        let surface = Self::default();
        surface.set_elements(elements);
        surface
    }

    pub fn set_elements(&self, elements: &[(&str, Rect)]) {
        self.layout.lock().unwrap().elements = elements
            .iter()
            .map(|(id, rect)| MediaElement::new(*id, *rect))
            .collect();
    }

    pub fn move_element(&self, id: &str, rect: Rect) {
        let mut layout = self.layout.lock().unwrap();
        if let Some(element) =
            layout.elements.iter_mut().find(|e| e.id.as_str() == id)
        {
            element.rect = rect;
        }
    }

    pub fn set_header(&self, offset_bottom: f32, content_top: f32) {
        self.layout.lock().unwrap().header = Some(HeaderProbe {
            offset_bottom,
            content_top,
        });
    }
}

impl MediaSurface for StubSurface {
    type Handle = StubHandle;

    fn resolve(&self, ids: &[MediaId]) -> Vec<StubHandle> {
        self.recorder.resolves.fetch_add(1, Ordering::SeqCst);
        let layout = self.layout.lock().unwrap();
        ids.iter()
            .filter(|id| layout.elements.iter().any(|e| &e.id == *id))
            .map(|id| StubHandle {
                id: id.clone(),
                recorder: self.recorder.clone(),
            })
            .collect()
    }

    fn media_elements(&self) -> Vec<MediaElement> {
        self.layout.lock().unwrap().elements.clone()
    }

    fn viewport(&self) -> Viewport {
        VIEWPORT
    }

    fn header_probe(&self) -> Option<HeaderProbe> {
        self.layout.lock().unwrap().header
    }
}

pub fn ids(raw: &[&str]) -> Vec<MediaId> {
    raw.iter().map(|id| MediaId::from(*id)).collect()
}
