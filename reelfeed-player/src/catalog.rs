//! Catalog sources for the simulated host.

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use reelfeed_model::{Catalog, Category, ClipSource};
use url::Url;

const DEMO_CDN: &str = "https://cdn.reelfeed.dev/clips/";

/// Three categories shaped like a short-video home feed: trending clips
/// first, then live streams, then recommendations.
pub fn demo_catalog() -> Catalog {
    let categories = vec![
        demo_category("hot", "Trending", "hot", 6),
        demo_category("live", "Live now", "live", 4),
        demo_category("recommend", "For you", "rec", 5),
    ];
    // Ids are unique by construction.
    Catalog::new(categories).unwrap_or_default()
}

fn demo_category(
    key: &str,
    title: &str,
    prefix: &str,
    count: usize,
) -> Category {
    let clips = (1..=count)
        .filter_map(|n| {
            let id = format!("{prefix}-{n}");
            let src =
                Url::parse(DEMO_CDN).ok()?.join(&format!("{id}.mp4")).ok()?;
            Some(ClipSource::new(id, src))
        })
        .collect();
    Category::new(key, title, clips)
}

/// Read a catalog from a JSON array of categories.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read catalog from {}", path.display())
    })?;
    parse_catalog(&contents)
        .with_context(|| format!("invalid catalog {}", path.display()))
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid catalog json: {err}"))
}
