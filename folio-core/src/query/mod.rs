pub mod builder;
pub mod engine;
pub mod facets;
pub mod filtering;
pub mod sorting;
pub mod summary;
pub mod types;

pub use builder::QueryStateBuilder;
pub use engine::QueryEngine;
pub use facets::{FacetBuilder, FacetRow, Facets};
pub use sorting::*;
pub use summary::CountSummary;
pub use types::*;
