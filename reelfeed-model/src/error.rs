use std::fmt::{self, Display};

use crate::ids::MediaId;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateMediaId { id: MediaId, category: String },
    EmptyCategoryKey,
    DuplicateCategory(String),
    InvalidSource { id: MediaId, reason: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::DuplicateMediaId { id, category } => {
                write!(f, "duplicate media id {id} in category '{category}'")
            }
            ModelError::EmptyCategoryKey => {
                write!(f, "category key must not be empty")
            }
            ModelError::DuplicateCategory(key) => {
                write!(f, "duplicate category '{key}'")
            }
            ModelError::InvalidSource { id, reason } => {
                write!(f, "invalid source for {id}: {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
