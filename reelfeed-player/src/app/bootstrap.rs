use std::path::{Path, PathBuf};

use reelfeed_config::{
    ConfigLoadError, ConfigLoader, FeedConfig, FeedConfigSource,
};
use reelfeed_model::Catalog;

use crate::catalog::{demo_catalog, load_catalog};
use crate::script::ScrollScript;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub config_source: FeedConfigSource,
    pub catalog_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(feed: FeedConfig) -> Self {
        Self {
            feed,
            config_source: FeedConfigSource::Default,
            catalog_path: None,
            script_path: None,
        }
    }

    /// Resolve configuration from `.env`, `REELFEED_CONFIG_*` and the
    /// default config files.
    pub fn from_environment() -> Result<Self, ConfigLoadError> {
        Self::load(&ConfigLoader::new())
    }

    /// Read configuration from an explicit file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        Self::load(&ConfigLoader::new().with_config_path(path))
    }

    fn load(loader: &ConfigLoader) -> Result<Self, ConfigLoadError> {
        let load = loader.load()?;
        if load.env_file_loaded {
            log::debug!("loaded variables from .env");
        }
        Ok(Self {
            feed: load.config,
            config_source: load.source,
            catalog_path: None,
            script_path: None,
        })
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_path = path;
        self
    }

    pub fn with_script_path(mut self, path: Option<PathBuf>) -> Self {
        self.script_path = path;
        self
    }

    /// The configured catalog, or the demo feed.
    pub fn catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(demo_catalog()),
        }
    }

    /// The configured scroll script, or the demo session.
    pub fn script(&self) -> anyhow::Result<ScrollScript> {
        match &self.script_path {
            Some(path) => Ok(ScrollScript::load(path)?),
            None => Ok(ScrollScript::demo()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(FeedConfig::default())
    }
}
