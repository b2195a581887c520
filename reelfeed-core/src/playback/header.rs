//! Header visibility: hide the navigation header while scrolling down.

use super::surface::HeaderProbe;

/// Direction tracker gated on the offset marker leaving the viewport.
///
/// Until the marker's bottom edge is above the viewport top
/// (`offset_bottom < 0`) no decision is made. Past the gate, every sample
/// compares the content top against the previous sample; content moving up
/// hides the header, anything else shows it.
#[derive(Debug, Clone, Default)]
pub struct HeaderVisibility {
    last_top: f32,
    hidden: bool,
}

impl HeaderVisibility {
    /// Header shown, last offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current header state.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Feed one sample. Returns the new state when it changed.
    pub fn observe(&mut self, probe: HeaderProbe) -> Option<bool> {
        if !(probe.offset_bottom < 0.0) {
            return None;
        }

        let delta = probe.content_top - self.last_top;
        self.last_top = probe.content_top;

        let hidden = delta < 0.0;
        log::trace!(
            "header sample top={} delta={delta} hidden={hidden}",
            probe.content_top
        );
        if hidden == self.hidden {
            return None;
        }
        self.hidden = hidden;
        Some(hidden)
    }

    /// Forget the previous sample, e.g. after the feed remounts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
