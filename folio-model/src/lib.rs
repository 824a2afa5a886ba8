//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod project;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{Complexity, FilterDimension, SortMode};
pub use ids::ProjectId;
pub use project::{
    BeforeAfter, Challenge, CodeSnippet, ProjectDetails, ProjectMetric,
    ProjectRecord, Testimonial,
};
