//! Scroll event coordinator and settle handler.
//!
//! The scheduler reacts to every scroll event from the vertical feed and
//! from each horizontal category row:
//!
//! 1. On the first event of a burst, pause whatever is playing.
//! 2. Mark the burst as in progress.
//! 3. Sample header visibility.
//! 4. Re-arm the settle timer.
//!
//! Once the timer fires, the settle handler recomputes the in-view set and
//! reconciles playback against it. Pausing is immediate; the expensive
//! recomputation is deferred and coalesced.

use std::time::{Duration, Instant};

use reelfeed_model::{Catalog, CategoryKey, MediaId};

use super::debounce::SettleTimer;
use super::facade::{MediaFacade, MediaOpReport};
use super::geometry::ActivationLine;
use super::header::HeaderVisibility;
use super::surface::MediaSurface;
use crate::constants::{
    DEFAULT_ACTIVATION_RATIO, DEFAULT_BOOTSTRAP_COUNT, DEFAULT_SETTLE_DELAY_MS,
};

/// Which scrollable region produced an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollSource {
    /// The vertically scrolling feed container.
    Feed,
    /// A horizontally scrolling category row.
    Row(CategoryKey),
}

impl std::fmt::Display for ScrollSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feed => write!(f, "feed"),
            Self::Row(key) => write!(f, "row:{key}"),
        }
    }
}

/// Tunables for the scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerSettings {
    /// Quiet period before a settle runs.
    pub settle_delay: Duration,
    /// Clips from the primary category played at mount.
    pub bootstrap_count: usize,
    /// Activation line as a fraction of viewport height.
    pub activation_ratio: f32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            bootstrap_count: DEFAULT_BOOTSTRAP_COUNT,
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
        }
    }
}

/// What a single scroll event caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollReaction {
    /// Set on the first event of a burst, when the playing set was paused.
    pub paused: Option<MediaOpReport>,
    /// New header state, when it changed.
    pub header_hidden: Option<bool>,
}

/// Result of one settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Something qualified: leaving clips were stopped and the in-view set
    /// now plays.
    Reconciled {
        /// Previously playing clips that were paused and rewound.
        stopped: Vec<MediaId>,
        /// The new playing set.
        playing: Vec<MediaId>,
    },
    /// Nothing qualified: the previous playing set was resumed in place.
    Resumed {
        /// The unchanged playing set.
        playing: Vec<MediaId>,
    },
}

impl SettleOutcome {
    /// Playing set after the settle.
    pub fn playing(&self) -> &[MediaId] {
        match self {
            Self::Reconciled { playing, .. } | Self::Resumed { playing } => {
                playing
            }
        }
    }
}

/// Playback scheduler for one mounted feed.
///
/// Owns the render surface, the playing set and the scrolling flag. There is
/// no global state; the host creates one scheduler per feed and drops it on
/// unmount.
#[derive(Debug)]
pub struct FeedScheduler<S> {
    facade: MediaFacade<S>,
    settings: SchedulerSettings,
    line: ActivationLine,
    scrolling: bool,
    header: HeaderVisibility,
    settle_timer: SettleTimer,
    bursts: u64,
    settles: u64,
}

impl<S: MediaSurface> FeedScheduler<S> {
    /// Scheduler over `surface`. Nothing plays until [`Self::mount`].
    pub fn new(surface: S, settings: SchedulerSettings) -> Self {
        Self {
            facade: MediaFacade::new(surface),
            line: ActivationLine::new(settings.activation_ratio),
            settle_timer: SettleTimer::new(settings.settle_delay),
            settings,
            scrolling: false,
            header: HeaderVisibility::new(),
            bursts: 0,
            settles: 0,
        }
    }

    /// [`Self::new`] with [`SchedulerSettings::default`].
    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, SchedulerSettings::default())
    }

    /// Initial-mount bootstrap: play the leading clips of the primary
    /// category regardless of geometry.
    pub fn mount(&mut self, catalog: &Catalog) -> MediaOpReport {
        let ids = catalog.bootstrap_ids(self.settings.bootstrap_count);
        self.bootstrap(&ids)
    }

    /// Play `ids` unconditionally and start tracking them.
    pub fn bootstrap(&mut self, ids: &[MediaId]) -> MediaOpReport {
        let report = self.facade.play_all(ids);
        log::debug!(
            "feed mounted; bootstrap playing {:?} ({}/{} resolved)",
            ids,
            report.resolved,
            report.requested
        );
        report
    }

    /// Handle one scroll event from any scrollable region of the feed.
    pub fn on_scroll(
        &mut self,
        source: &ScrollSource,
        now: Instant,
    ) -> ScrollReaction {
        let mut reaction = ScrollReaction::default();

        if !self.scrolling {
            self.bursts += 1;
            let report = self.facade.pause_playing();
            log::debug!(
                "scroll burst #{} started from {source}; paused {} clip(s)",
                self.bursts,
                report.resolved
            );
            reaction.paused = Some(report);
        }
        self.scrolling = true;

        if let Some(probe) = self.facade.surface().header_probe() {
            reaction.header_hidden = self.header.observe(probe);
        }

        self.settle_timer.arm(now);
        reaction
    }

    /// Run the settle handler if the quiet period has elapsed.
    pub fn poll_settle(&mut self, now: Instant) -> Option<SettleOutcome> {
        if self.settle_timer.fire_if_due(now) {
            Some(self.settle())
        } else {
            None
        }
    }

    /// Recompute the in-view set and reconcile playback against it.
    pub fn settle(&mut self) -> SettleOutcome {
        self.settle_timer.cancel();
        self.settles += 1;

        let in_view = self.in_view_ids();
        let outcome = if in_view.is_empty() {
            let playing = self.facade.playing().to_vec();
            self.facade.play_all(&playing);
            SettleOutcome::Resumed { playing }
        } else {
            let stopped = self.facade.tracker().ids_to_stop(&in_view);
            self.facade.stop_all(&stopped);
            self.facade.play_all(&in_view);
            SettleOutcome::Reconciled {
                stopped,
                playing: in_view,
            }
        };

        self.scrolling = false;
        log::debug!("settle #{}: {:?}", self.settles, outcome);
        outcome
    }

    /// Ids of every mounted element that currently hits the activation line,
    /// in render order.
    pub fn in_view_ids(&self) -> Vec<MediaId> {
        let surface = self.facade.surface();
        let viewport = surface.viewport();
        surface
            .media_elements()
            .into_iter()
            .filter(|element| self.line.hits(&element.rect, &viewport))
            .map(|element| element.id)
            .collect()
    }

    /// Tear down: drop any pending settle and pause the playing set.
    pub fn unmount(&mut self) -> MediaOpReport {
        self.settle_timer.cancel();
        self.scrolling = false;
        self.header.reset();
        let report = self.facade.pause_playing();
        log::debug!("feed unmounted; paused {} clip(s)", report.resolved);
        report
    }

    /// Clips last instructed to play.
    pub fn playing(&self) -> &[MediaId] {
        self.facade.playing()
    }

    /// True between the first event of a burst and its settle.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Whether the header is currently hidden.
    pub fn header_hidden(&self) -> bool {
        self.header.hidden()
    }

    /// When the pending settle is due, if one is armed.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_timer.deadline()
    }

    /// Settings the scheduler was built with.
    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    /// Line the settle probe tests against.
    pub fn activation_line(&self) -> ActivationLine {
        self.line
    }

    /// Number of scroll bursts seen so far.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    /// Number of settles run so far.
    pub fn settles(&self) -> u64 {
        self.settles
    }

    /// Render surface this scheduler drives.
    pub fn surface(&self) -> &S {
        self.facade.surface()
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        self.facade.surface_mut()
    }

    /// Drop the scheduler and hand back its surface.
    pub fn into_surface(self) -> S {
        self.facade.into_surface()
    }
}
