use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidId(String),
    UnknownDimension(String),
    UnknownSortMode(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(raw) => {
                write!(f, "invalid project id: {raw}")
            }
            ModelError::UnknownDimension(raw) => {
                write!(f, "unknown filter dimension: {raw}")
            }
            ModelError::UnknownSortMode(raw) => {
                write!(f, "unknown sort mode: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
