//! Core data model definitions shared across reelfeed crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod prelude;

pub use catalog::{Catalog, Category, ClipSource};
pub use error::{ModelError, Result as ModelResult};
pub use geometry::{MediaElement, Rect, Viewport};
pub use ids::{CategoryKey, MediaId, media_ids};
