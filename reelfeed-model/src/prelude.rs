//! Convenience re-exports for downstream crates.

pub use crate::catalog::{Catalog, Category, ClipSource};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::geometry::{MediaElement, Rect, Viewport};
pub use crate::ids::{CategoryKey, MediaId, media_ids};
