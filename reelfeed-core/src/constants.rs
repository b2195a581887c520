//! Compiled defaults for the playback scheduler.

/// Quiet period after the last scroll event before playback is reconciled.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Number of clips from the primary category that play on mount.
pub const DEFAULT_BOOTSTRAP_COUNT: usize = 2;

/// Activation line position as a fraction of the viewport height.
pub const DEFAULT_ACTIVATION_RATIO: f32 = 0.5;

/// Attribute a DOM-backed host stamps on every media element.
pub const MEDIA_ID_ATTRIBUTE: &str = "data-video-id";
