use std::borrow::Borrow;

/// Opaque identifier for one playable clip.
///
/// Ids are assigned by the data source and stay stable for the lifetime of
/// the feed. The scheduler never generates them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MediaId(String);

impl MediaId {
    pub fn new(id: impl Into<String>) -> Self {
        MediaId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MediaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MediaId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        MediaId(id.to_owned())
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        MediaId(id)
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key identifying one category row in the feed (e.g. `hot`, `live`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(key: impl Into<String>) -> Self {
        CategoryKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Borrow<str> for CategoryKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        CategoryKey(key.to_owned())
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect a list of string-like values into media ids.
pub fn media_ids<I, S>(ids: I) -> Vec<MediaId>
where
    I: IntoIterator<Item = S>,
    S: Into<MediaId>,
{
    ids.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn media_id_is_looked_up_by_str() {
        let mut set = HashSet::new();
        set.insert(MediaId::from("v1"));
        assert!(set.contains("v1"));
        assert!(!set.contains("v2"));
    }

    #[test]
    fn media_ids_preserves_order_and_duplicates() {
        let ids = media_ids(["b", "a", "b"]);
        let raw: Vec<&str> = ids.iter().map(MediaId::as_str).collect();
        assert_eq!(raw, vec!["b", "a", "b"]);
    }

    #[test]
    fn blank_category_key_is_empty() {
        assert!(CategoryKey::from("  ").is_empty());
        assert!(!CategoryKey::from("hot").is_empty());
    }
}
