//! Media control facade: batched play / pause / stop over the render tree.
//!
//! Every operation resolves its ids with exactly one [`MediaSurface::resolve`]
//! call. Empty operands return before any lookup. Ids that resolve to
//! nothing are skipped without complaint; an element may simply have been
//! unmounted mid-scroll.

use reelfeed_model::MediaId;

use super::surface::{MediaHandle, MediaSurface};
use super::tracker::PlaybackTracker;

/// What a facade operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaOpReport {
    /// Ids passed to the operation.
    pub requested: usize,
    /// Handles the surface returned for them.
    pub resolved: usize,
}

impl MediaOpReport {
    /// Requested ids with no mounted element.
    pub fn missing(&self) -> usize {
        self.requested.saturating_sub(self.resolved)
    }

    /// True when the operation returned before resolving anything.
    pub fn is_noop(&self) -> bool {
        self.requested == 0
    }
}

/// Owns the render surface and the playing set it drives.
#[derive(Debug)]
pub struct MediaFacade<S> {
    surface: S,
    tracker: PlaybackTracker,
}

impl<S: MediaSurface> MediaFacade<S> {
    /// Facade over `surface` with an empty playing set.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            tracker: PlaybackTracker::new(),
        }
    }

    /// Render surface behind the facade.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Drop the facade and hand back its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Playing set as last written by [`Self::play_all`].
    pub fn tracker(&self) -> &PlaybackTracker {
        &self.tracker
    }

    /// Ids in the playing set, in play order.
    pub fn playing(&self) -> &[MediaId] {
        self.tracker.snapshot()
    }

    /// Play every resolvable id, then make `ids` the playing set.
    pub fn play_all(&mut self, ids: &[MediaId]) -> MediaOpReport {
        if ids.is_empty() {
            return MediaOpReport::default();
        }
        let report = self.apply(ids, |handle| handle.play());
        self.tracker.replace(ids.to_vec());
        report
    }

    /// Pause and rewind. Used for clips leaving the in-view set so they
    /// restart from the beginning next time.
    pub fn stop_all(&self, ids: &[MediaId]) -> MediaOpReport {
        self.apply(ids, |handle| {
            handle.pause();
            handle.seek_to_start();
        })
    }

    /// Pause in place. Used while a scroll is in progress; clips resume from
    /// where they left off.
    pub fn pause_all(&self, ids: &[MediaId]) -> MediaOpReport {
        self.apply(ids, |handle| handle.pause())
    }

    /// Pause whatever is currently tracked as playing.
    pub fn pause_playing(&self) -> MediaOpReport {
        self.pause_all(self.tracker.snapshot())
    }

    fn apply<F>(&self, ids: &[MediaId], op: F) -> MediaOpReport
    where
        F: Fn(&S::Handle),
    {
        if ids.is_empty() {
            return MediaOpReport::default();
        }

        let handles = self.surface.resolve(ids);
        for handle in &handles {
            op(handle);
        }

        let report = MediaOpReport {
            requested: ids.len(),
            resolved: handles.len(),
        };
        if report.missing() > 0 {
            log::trace!(
                "resolved {}/{} media handles",
                report.resolved,
                report.requested
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::surface::HeaderProbe;
    use mockall::mock;
    use reelfeed_model::{MediaElement, Viewport, media_ids};
    use std::sync::{Arc, Mutex};

    type OpLog = Arc<Mutex<Vec<String>>>;

    #[derive(Debug, Clone)]
    struct RecordingHandle {
        id: MediaId,
        log: OpLog,
    }

    impl RecordingHandle {
        fn record(&self, op: &str) {
            self.log.lock().unwrap().push(format!("{op}:{}", self.id));
        }
    }

    impl MediaHandle for RecordingHandle {
        fn play(&self) {
            self.record("play");
        }
        fn pause(&self) {
            self.record("pause");
        }
        fn seek_to_start(&self) {
            self.record("seek");
        }
    }

    mock! {
        Surface {}
        impl MediaSurface for Surface {
            type Handle = RecordingHandle;
            fn resolve(&self, ids: &[MediaId]) -> Vec<RecordingHandle>;
            fn media_elements(&self) -> Vec<MediaElement>;
            fn viewport(&self) -> Viewport;
            fn header_probe(&self) -> Option<HeaderProbe>;
        }
    }

    /// Surface whose `resolve` must be called exactly `times` and which only
    /// knows about `mounted` ids.
    fn surface(mounted: &[&str], times: usize, log: &OpLog) -> MockSurface {
        let mounted: Vec<MediaId> = media_ids(mounted.iter().copied());
        let log = log.clone();
        let mut mock = MockSurface::new();
        mock.expect_resolve().times(times).returning(move |ids| {
            ids.iter()
                .filter(|id| mounted.contains(*id))
                .map(|id| RecordingHandle {
                    id: id.clone(),
                    log: log.clone(),
                })
                .collect()
        });
        mock
    }

    fn ops(log: &OpLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn empty_operands_never_resolve() {
        let log = OpLog::default();
        let mut facade = MediaFacade::new(surface(&["v1"], 0, &log));
        facade.tracker.replace(media_ids(["v1"]));

        assert!(facade.play_all(&[]).is_noop());
        assert!(facade.stop_all(&[]).is_noop());
        assert!(facade.pause_all(&[]).is_noop());

        assert!(ops(&log).is_empty());
        assert_eq!(facade.playing(), media_ids(["v1"]).as_slice());
    }

    #[test]
    fn play_all_resolves_once_and_replaces_playing_set() {
        let log = OpLog::default();
        let mut facade = MediaFacade::new(surface(&["v1", "v2", "v3"], 1, &log));
        facade.tracker.replace(media_ids(["v9"]));

        let report = facade.play_all(&media_ids(["v2", "v3"]));

        assert_eq!(report, MediaOpReport { requested: 2, resolved: 2 });
        assert_eq!(ops(&log), vec!["play:v2", "play:v3"]);
        assert_eq!(facade.playing(), media_ids(["v2", "v3"]).as_slice());
    }

    #[test]
    fn stop_all_pauses_and_rewinds() {
        let log = OpLog::default();
        let facade = MediaFacade::new(surface(&["v1", "v2"], 1, &log));

        facade.stop_all(&media_ids(["v1", "v2"]));

        assert_eq!(
            ops(&log),
            vec!["pause:v1", "seek:v1", "pause:v2", "seek:v2"]
        );
    }

    #[test]
    fn pause_all_does_not_rewind() {
        let log = OpLog::default();
        let facade = MediaFacade::new(surface(&["v1"], 1, &log));

        facade.pause_all(&media_ids(["v1"]));

        assert_eq!(ops(&log), vec!["pause:v1"]);
    }

    #[test]
    fn missing_handles_are_skipped() {
        let log = OpLog::default();
        let mut facade = MediaFacade::new(surface(&["v2"], 2, &log));

        let paused = facade.pause_all(&media_ids(["gone", "v2"]));
        let played = facade.play_all(&media_ids(["gone"]));

        assert_eq!(paused.missing(), 1);
        assert_eq!(played, MediaOpReport { requested: 1, resolved: 0 });
        assert_eq!(ops(&log), vec!["pause:v2"]);
        // Tracking follows the request even when nothing resolved.
        assert_eq!(facade.playing(), media_ids(["gone"]).as_slice());
    }

    #[test]
    fn duplicate_ids_are_tolerated() {
        let log = OpLog::default();
        let mut facade = MediaFacade::new(surface(&["v1"], 1, &log));

        let report = facade.play_all(&media_ids(["v1", "v1"]));

        assert_eq!(report.requested, 2);
        assert_eq!(ops(&log), vec!["play:v1", "play:v1"]);
    }
}
