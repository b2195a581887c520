use thiserror::Error;

use super::models::feed::FeedConfig;

/// Values the scheduler cannot run with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("activation_ratio {ratio} must lie strictly between 0 and 1")]
    ActivationRatioOutOfRange { ratio: f32 },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveDimension { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    NegativeDimension { field: &'static str, value: f32 },
}

/// A value that loads but probably is not what the operator meant.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    /// Suggested fix, when there is an obvious one.
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Reject unusable values and collect warnings for suspicious ones.
pub fn apply_guard_rails(
    config: &FeedConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let ratio = config.activation_ratio;
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(ConfigGuardRailError::ActivationRatioOutOfRange { ratio });
    }

    for (field, value) in config.layout.positive_dimensions() {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigGuardRailError::NonPositiveDimension {
                field,
                value,
            });
        }
    }

    for (field, value) in config.layout.non_negative_dimensions() {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigGuardRailError::NegativeDimension { field, value });
        }
    }

    if config.settle_delay_ms == 0 {
        warnings.push_with_hint(
            "settle_delay_ms is 0; playback is reconciled on every scroll event",
            "Use a quiet period of a few hundred milliseconds to coalesce scroll bursts",
        );
    }

    if config.bootstrap_count == 0 {
        warnings.push(
            "bootstrap_count is 0; nothing plays until the first scroll settles",
        );
    }

    if config.layout.clip_width > config.layout.viewport_width {
        warnings.push_with_hint(
            "clip_width exceeds viewport_width; no clip can ever be horizontally in view",
            "Shrink layout.clip_width or widen layout.viewport_width",
        );
    }

    Ok(warnings)
}
