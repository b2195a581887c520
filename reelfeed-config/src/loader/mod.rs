//! One-stop loading: `.env`, config lookup, then guard rails.

pub mod error;

use std::path::{Path, PathBuf};

use crate::models::feed::{FeedConfig, FeedConfigSource};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// A validated configuration and how it was obtained.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FeedConfig,
    pub source: FeedConfigSource,
    pub warnings: ConfigWarnings,
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_env_file: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of consulting the environment.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load variables from this file instead of the nearest `.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.skip_env_file = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;

        let (config, source) = match &self.config_path {
            Some(path) => (
                FeedConfig::load_from_file(path)
                    .map_err(ConfigLoadError::Feed)?,
                FeedConfigSource::File(path.clone()),
            ),
            None => FeedConfig::load_from_env().map_err(ConfigLoadError::Feed)?,
        };

        let warnings = apply_guard_rails(&config)?;
        for warning in warnings.iter() {
            match &warning.hint {
                Some(hint) => {
                    tracing::warn!("{} (hint: {})", warning.message, hint)
                }
                None => tracing::warn!("{}", warning.message),
            }
        }
        tracing::debug!(?source, "feed configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
            env_file_loaded,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.skip_env_file {
            return Ok(false);
        }
        let result = match &self.env_file {
            Some(path) => dotenvy::from_path(Path::new(path)).map(|_| ()),
            None => dotenvy::dotenv().map(|_| ()),
        };
        match result {
            Ok(()) => Ok(true),
            Err(err) if err.not_found() && self.env_file.is_none() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
