use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a catalog project. Unique and stable for the lifetime of a
/// catalog; "newest" ordering compares these numerically.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    pub const fn new(raw: u32) -> Self {
        ProjectId(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProjectId {
    fn from(raw: u32) -> Self {
        ProjectId(raw)
    }
}

impl FromStr for ProjectId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProjectId)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
