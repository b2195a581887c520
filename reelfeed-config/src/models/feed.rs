use anyhow::{Context, anyhow};
use reelfeed_core::SchedulerSettings;
use reelfeed_core::constants::{
    DEFAULT_ACTIVATION_RATIO, DEFAULT_BOOTSTRAP_COUNT, DEFAULT_SETTLE_DELAY_MS,
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use super::layout::LayoutConfig;
use crate::constants::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILES};

/// Source that produced the feed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Scheduler tunables plus the page geometry of the simulated host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Quiet period (ms) after the last scroll event before playback is
    /// reconciled. Lower values react faster but recompute more often
    /// during slow drags.
    pub settle_delay_ms: u64,
    /// Clips of the first category played on mount, before any geometry
    /// is consulted.
    pub bootstrap_count: usize,
    /// Position of the activation line as a fraction of viewport height.
    pub activation_ratio: f32,
    pub layout: LayoutConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            bootstrap_count: DEFAULT_BOOTSTRAP_COUNT,
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
            layout: LayoutConfig::default(),
        }
    }
}

impl FeedConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn scheduler_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            settle_delay: self.settle_delay(),
            bootstrap_count: self.bootstrap_count,
            activation_ratio: self.activation_ratio,
        }
    }

    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$REELFEED_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REELFEED_CONFIG_JSON` (inline JSON),
    /// 3) the first existing file from [`DEFAULT_CONFIG_FILES`],
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, FeedConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same as [`FeedConfig::load_from_env`] but with an explicit variable
    /// lookup and a base directory for the default files.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, FeedConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, FeedConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, FeedConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, FeedConfigSource::File(path)));
        }

        Ok((Self::default(), FeedConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read feed config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid feed config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid feed config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse feed config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid feed config json: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
