use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal complexity label attached to a project.
///
/// Catalog data is not trusted to only carry the four known labels, so any
/// other label is kept verbatim as [`Complexity::Unrecognized`]. It still
/// takes part in filtering and facets, and ranks below every known label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
    Enterprise,
    Unrecognized(String),
}

impl Complexity {
    pub fn known() -> &'static [Complexity] {
        use Complexity::*;
        const KNOWN: &[Complexity] = &[Simple, Medium, Complex, Enterprise];
        KNOWN
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Simple" => Complexity::Simple,
            "Medium" => Complexity::Medium,
            "Complex" => Complexity::Complex,
            "Enterprise" => Complexity::Enterprise,
            other => Complexity::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Medium",
            Complexity::Complex => "Complex",
            Complexity::Enterprise => "Enterprise",
            Complexity::Unrecognized(label) => label,
        }
    }

    /// Sort rank, `Simple = 1` up to `Enterprise = 4`. Unrecognized labels
    /// rank 0.
    pub fn rank(&self) -> u8 {
        match self {
            Complexity::Simple => 1,
            Complexity::Medium => 2,
            Complexity::Complex => 3,
            Complexity::Enterprise => 4,
            Complexity::Unrecognized(_) => 0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Complexity::Unrecognized(_))
    }
}

impl From<String> for Complexity {
    fn from(label: String) -> Self {
        match Complexity::from_label(&label) {
            Complexity::Unrecognized(_) => Complexity::Unrecognized(label),
            known => known,
        }
    }
}

impl From<&str> for Complexity {
    fn from(label: &str) -> Self {
        Complexity::from_label(label)
    }
}

impl From<Complexity> for String {
    fn from(value: Complexity) -> Self {
        match value {
            Complexity::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent axis along which catalog records can be restricted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Type,
    Industry,
    Complexity,
}

impl FilterDimension {
    pub fn all() -> &'static [FilterDimension] {
        use FilterDimension::*;
        &[Type, Industry, Complexity]
    }

    pub fn key(&self) -> &'static str {
        match self {
            FilterDimension::Type => "type",
            FilterDimension::Industry => "industry",
            FilterDimension::Complexity => "complexity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Type => "Project Type",
            FilterDimension::Industry => "Industry",
            FilterDimension::Complexity => "Complexity",
        }
    }
}

impl FromStr for FilterDimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterDimension::all()
            .iter()
            .copied()
            .find(|dimension| dimension.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownDimension(s.to_string()))
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Ordering applied to the filtered catalog view.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Featured projects first, otherwise catalog order.
    #[default]
    Featured,
    /// Highest id first.
    Newest,
    /// Highest complexity rank first.
    Complexity,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        use SortMode::*;
        &[Featured, Newest, Complexity]
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::Newest => "newest",
            SortMode::Complexity => "complexity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Featured => "Featured First",
            SortMode::Newest => "Newest First",
            SortMode::Complexity => "Most Complex",
        }
    }
}

impl FromStr for SortMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::all()
            .iter()
            .copied()
            .find(|mode| mode.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownSortMode(s.to_string()))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
