use super::super::validation::ConfigGuardRailError;

use thiserror::Error;

/// Why [`ConfigLoader::load`](super::ConfigLoader::load) gave up.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config source could not be read or parsed.
    #[error("failed to load feed configuration: {0}")]
    Feed(#[source] anyhow::Error),
    /// The config parsed but a value is unusable.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    /// An explicitly requested `.env` file was missing or malformed.
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
