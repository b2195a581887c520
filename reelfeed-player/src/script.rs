//! Scroll scripts: recorded user gestures replayed against the simulated feed.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [{"feed": 120}, {"wait_ms": 40}, {"row": "hot", "dx": 172}, {"wait_ms": 800}]
//! ```

use std::{fs, path::Path, time::Duration};

use reelfeed_model::CategoryKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read scroll script {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scroll script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

/// One gesture or pause.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScrollStep {
    /// Scroll the page vertically by `feed` pixels.
    Feed { feed: f32 },
    /// Scroll one category row horizontally.
    Row { row: CategoryKey, dx: f32 },
    /// Do nothing for a while.
    Wait { wait_ms: u64 },
}

impl ScrollStep {
    pub fn feed(dy: f32) -> Self {
        Self::Feed { feed: dy }
    }

    pub fn row(key: impl Into<CategoryKey>, dx: f32) -> Self {
        Self::Row {
            row: key.into(),
            dx,
        }
    }

    pub fn wait(ms: u64) -> Self {
        Self::Wait { wait_ms: ms }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScrollScript {
    pub steps: Vec<ScrollStep>,
}

impl ScrollScript {
    pub fn new(steps: Vec<ScrollStep>) -> Self {
        Self { steps }
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let raw = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(raw)?;
        script.validate()?;
        Ok(script)
    }

    /// A short session over the demo feed: drag down to the live row with a
    /// few quick flicks, swipe it sideways, then come back up.
    pub fn demo() -> Self {
        let mut steps = Vec::new();
        for _ in 0..6 {
            steps.push(ScrollStep::feed(52.0));
            steps.push(ScrollStep::wait(16));
        }
        steps.push(ScrollStep::wait(700));
        steps.push(ScrollStep::row("live", 172.0));
        steps.push(ScrollStep::wait(700));
        steps.push(ScrollStep::feed(-312.0));
        steps.push(ScrollStep::wait(700));
        Self::new(steps)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrollStep> {
        self.steps.iter()
    }

    /// Sum of all waits.
    pub fn duration(&self) -> Duration {
        let ms = self
            .steps
            .iter()
            .map(|step| match step {
                ScrollStep::Wait { wait_ms } => *wait_ms,
                _ => 0,
            })
            .sum();
        Duration::from_millis(ms)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        for (index, step) in self.steps.iter().enumerate() {
            let reason = match step {
                ScrollStep::Feed { feed } if !feed.is_finite() => {
                    "feed delta must be finite"
                }
                ScrollStep::Row { dx, .. } if !dx.is_finite() => {
                    "row delta must be finite"
                }
                ScrollStep::Row { row, .. } if row.is_empty() => {
                    "row key must not be empty"
                }
                _ => continue,
            };
            return Err(ScriptError::InvalidStep {
                index,
                reason: reason.to_string(),
            });
        }
        Ok(())
    }
}
