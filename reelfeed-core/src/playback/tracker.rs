//! Playback state tracker: the ids currently instructed to play.

use std::collections::HashSet;

use reelfeed_model::MediaId;

/// Ordered set of clips the scheduler last told to play.
///
/// Written only through [`MediaFacade::play_all`](super::MediaFacade::play_all);
/// read by the settle diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackTracker {
    playing: Vec<MediaId>,
}

impl PlaybackTracker {
    /// Empty playing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked ids in play order.
    pub fn snapshot(&self) -> &[MediaId] {
        &self.playing
    }

    /// Total replacement; entries absent from `ids` stop being tracked.
    pub fn replace(&mut self, ids: Vec<MediaId>) {
        self.playing = ids;
    }

    /// True when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.playing.is_empty()
    }

    /// Number of tracked ids.
    pub fn len(&self) -> usize {
        self.playing.len()
    }

    /// Whether `id` is in the playing set.
    pub fn contains(&self, id: &MediaId) -> bool {
        self.playing.contains(id)
    }

    /// Tracked ids missing from `new_ids`, in tracked order.
    pub fn ids_to_stop(&self, new_ids: &[MediaId]) -> Vec<MediaId> {
        if new_ids.is_empty() {
            return self.playing.clone();
        }
        let keep: HashSet<&MediaId> = new_ids.iter().collect();
        self.playing
            .iter()
            .filter(|id| !keep.contains(id))
            .cloned()
            .collect()
    }
}
