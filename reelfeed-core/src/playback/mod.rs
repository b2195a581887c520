//! Viewport-driven playback scheduling.
//!
//! Data flow for one scroll burst:
//!
//! scroll event -> [`FeedScheduler::on_scroll`] -> pause everything once
//! -> (quiet period) -> settle -> geometry probe per element
//! -> tracker diff -> stop leaving clips, play the in-view set.

pub mod debounce;
pub mod driver;
pub mod facade;
pub mod geometry;
pub mod header;
pub mod scheduler;
pub mod surface;
pub mod tracker;

pub use debounce::SettleTimer;
pub use driver::{FeedHandle, FeedStatus, start_feed_driver};
pub use facade::{MediaFacade, MediaOpReport};
pub use geometry::{ActivationLine, is_in_view};
pub use header::HeaderVisibility;
pub use scheduler::{
    FeedScheduler, SchedulerSettings, ScrollReaction, ScrollSource,
    SettleOutcome,
};
pub use surface::{HeaderProbe, MediaHandle, MediaSurface, selector_for};
pub use tracker::PlaybackTracker;
