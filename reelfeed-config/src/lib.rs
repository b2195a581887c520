//! Configuration for the reelfeed playback scheduler.
//!
//! Settings come from a TOML or JSON file, inline JSON in the environment,
//! or built-in defaults. [`ConfigLoader`] wraps that lookup with `.env`
//! handling and the guard rails in [`validation`], so hosts get a single
//! validated [`FeedConfig`] plus any non-fatal warnings.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::feed::{FeedConfig, FeedConfigSource};
pub use models::layout::LayoutConfig;
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
