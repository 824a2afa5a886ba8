//! Project records as they appear in the portfolio catalog.
//!
//! Field names follow the camelCase layout of the catalog JSON. Only the
//! attributes on [`ProjectRecord`] itself take part in querying; everything in
//! [`ProjectDetails`] is narrative payload for detail views.

use crate::filter_types::{Complexity, FilterDimension};
use crate::ids::ProjectId;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub featured: bool,
    #[serde(flatten)]
    pub details: ProjectDetails,
}

impl ProjectRecord {
    /// Value this record carries for `dimension`. Missing and empty values
    /// both read as `None`.
    pub fn dimension_value(&self, dimension: FilterDimension) -> Option<&str> {
        let value = match dimension {
            FilterDimension::Type => self.project_type.as_deref(),
            FilterDimension::Industry => self.industry.as_deref(),
            FilterDimension::Complexity => {
                self.complexity.as_ref().map(Complexity::as_str)
            }
        };
        value.filter(|v| !v.is_empty())
    }

    /// Complexity rank used for ordering; records without a complexity rank 0.
    pub fn complexity_rank(&self) -> u8 {
        self.complexity.as_ref().map_or(0, Complexity::rank)
    }
}

/// Narrative payload rendered by detail views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<ProjectMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_approach: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<Challenge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_after: Option<BeforeAfter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetric {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSnippet {
    pub language: String,
    pub description: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeAfter {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
}
