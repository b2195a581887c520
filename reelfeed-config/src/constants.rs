//! Environment keys and file names consulted while loading configuration.

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "REELFEED_CONFIG_PATH";

/// Inline JSON config.
pub const CONFIG_JSON_ENV: &str = "REELFEED_CONFIG_JSON";

/// Files probed, in order, when neither environment key is set.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "reelfeed.toml",
    "reelfeed.json",
    "config/reelfeed.toml",
    "config/reelfeed.json",
];
