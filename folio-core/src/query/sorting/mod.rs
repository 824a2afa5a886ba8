//! Sorting stage of the query pipeline
//!
//! This module provides:
//! - Core traits for sort fields and their keys
//! - Field marker types for the orderings a [`SortMode`] can select
//! - Stable strategies composing those fields
//!
//! Every ordering here is stable: records that compare equal keep the
//! relative order they had coming out of the filter stage.

pub mod fields;
pub mod keys;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use fields::*;
pub use keys::*;
pub use strategy::*;
pub use traits::*;

use folio_model::{ProjectRecord, SortMode};
use std::borrow::Borrow;

/// Stage 3: order `items` in place according to `mode`.
pub fn apply_sort<T>(items: &mut [T], mode: SortMode)
where
    T: Borrow<ProjectRecord> + Clone,
{
    match mode {
        SortMode::Featured => FeaturedFirst.sort(items),
        SortMode::Newest => FieldSort::new(IdField, true).sort(items),
        SortMode::Complexity => {
            FieldSort::new(ComplexityField, true).sort(items)
        }
    }
}
