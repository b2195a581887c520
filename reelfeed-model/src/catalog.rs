//! In-memory feed data source: categories of clips.

use std::collections::HashSet;

use url::Url;

use crate::error::{ModelError, Result};
use crate::ids::{CategoryKey, MediaId};

/// One playable clip as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipSource {
    pub id: MediaId,
    pub src: Url,
}

impl ClipSource {
    pub fn new(id: impl Into<MediaId>, src: Url) -> Self {
        Self { id: id.into(), src }
    }

    /// Parse the source from a string.
    pub fn parse(id: impl Into<MediaId>, src: &str) -> Result<Self> {
        let id = id.into();
        match Url::parse(src) {
            Ok(src) => Ok(Self { id, src }),
            Err(err) => Err(ModelError::InvalidSource {
                id,
                reason: err.to_string(),
            }),
        }
    }
}

/// A titled, horizontally scrollable row of clips.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub key: CategoryKey,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub clips: Vec<ClipSource>,
}

impl Category {
    pub fn new(
        key: impl Into<CategoryKey>,
        title: impl Into<String>,
        clips: Vec<ClipSource>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            clips,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &MediaId> {
        self.clips.iter().map(|clip| &clip.id)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Ordered list of categories. The first category is the primary one and
/// supplies the clips that auto-play when the feed mounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Category>", into = "Vec<Category>")
)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or repeated category keys and media
    /// ids that appear more than once anywhere in the feed.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut keys: HashSet<&CategoryKey> = HashSet::new();
        let mut ids: HashSet<&MediaId> = HashSet::new();

        for category in &categories {
            if category.key.is_empty() {
                return Err(ModelError::EmptyCategoryKey);
            }
            if !keys.insert(&category.key) {
                return Err(ModelError::DuplicateCategory(
                    category.key.to_string(),
                ));
            }
            for id in category.ids() {
                if !ids.insert(id) {
                    return Err(ModelError::DuplicateMediaId {
                        id: id.clone(),
                        category: category.key.to_string(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn primary(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key.as_str() == key)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Every clip in feed order.
    pub fn clips(&self) -> impl Iterator<Item = &ClipSource> {
        self.categories.iter().flat_map(|c| c.clips.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The first `count` ids of the primary category.
    pub fn bootstrap_ids(&self, count: usize) -> Vec<MediaId> {
        self.primary()
            .map(|c| c.ids().take(count).cloned().collect())
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<Category>> for Catalog {
    type Error = ModelError;

    fn try_from(categories: Vec<Category>) -> Result<Self> {
        Catalog::new(categories)
    }
}

impl From<Catalog> for Vec<Category> {
    fn from(catalog: Catalog) -> Self {
        catalog.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(id: &str) -> ClipSource {
        ClipSource::parse(id, &format!("https://cdn.example.com/{id}.mp4"))
            .expect("valid url")
    }

    fn hot() -> Category {
        Category::new("hot", "Hot", vec![clip("v1"), clip("v2"), clip("v3")])
    }

    #[test]
    fn bootstrap_takes_leading_ids_of_primary_category() {
        let live = Category::new("live", "Live", vec![clip("l1")]);
        let catalog = Catalog::new(vec![hot(), live]).unwrap();

        let ids = catalog.bootstrap_ids(2);
        assert_eq!(ids, vec![MediaId::from("v1"), MediaId::from("v2")]);
        assert_eq!(catalog.bootstrap_ids(10).len(), 3);
    }

    #[test]
    fn empty_catalog_bootstraps_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.bootstrap_ids(2).is_empty());
        assert!(catalog.primary().is_none());
    }

    #[test]
    fn duplicate_ids_across_categories_are_rejected() {
        let live = Category::new("live", "Live", vec![clip("v2")]);
        let err = Catalog::new(vec![hot(), live]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateMediaId {
                id: MediaId::from("v2"),
                category: "live".into(),
            }
        );
    }

    #[test]
    fn repeated_category_key_is_rejected() {
        let err = Catalog::new(vec![hot(), hot()]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateCategory(key) if key == "hot"));
    }

    #[test]
    fn invalid_source_reports_the_clip() {
        let err = ClipSource::parse("bad", "not a url").unwrap_err();
        assert!(matches!(err, ModelError::InvalidSource { id, .. } if id.as_str() == "bad"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn catalog_deserializes_with_validation() {
        let raw = r#"[
            {"key": "hot", "title": "Hot", "clips": [
                {"id": "v1", "src": "https://cdn.example.com/v1.mp4"}
            ]},
            {"key": "live", "title": "Live", "clips": [
                {"id": "v1", "src": "https://cdn.example.com/v1.mp4"}
            ]}
        ]"#;
        let parsed: std::result::Result<Catalog, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }
}
