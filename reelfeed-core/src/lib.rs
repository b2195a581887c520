//! reelfeed core
//!
//! Playback scheduling for a scroll-driven media feed. As the user scrolls a
//! vertical feed (or any of its horizontal category rows), the scheduler
//! pauses whatever is playing on the first movement, waits for scrolling to
//! settle, then plays exactly the clips that straddle the activation line.
//!
//! The render tree is abstracted behind [`playback::MediaSurface`]; hosts
//! provide element geometry and playable handles, the scheduler decides what
//! to do with them.

pub mod constants;
pub mod error;
pub mod playback;

pub use error::DriverError;
pub use playback::{
    ActivationLine, FeedHandle, FeedScheduler, FeedStatus, HeaderProbe,
    HeaderVisibility, MediaFacade, MediaHandle, MediaOpReport, MediaSurface,
    PlaybackTracker, SchedulerSettings, ScrollReaction, ScrollSource,
    SettleOutcome, SettleTimer, is_in_view, start_feed_driver,
};
