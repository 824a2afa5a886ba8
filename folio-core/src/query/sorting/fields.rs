//! Field marker types for the supported orderings
//!
//! These zero-sized types represent the record attributes a sort can key on.

use super::keys::{IdKey, RankKey};
use super::traits::SortFieldMarker;
use folio_model::ProjectRecord;

/// Sort by numeric project id
#[derive(Copy, Clone, Debug)]
pub struct IdField;

impl SortFieldMarker for IdField {
    type Key = IdKey;

    fn extract(self, record: &ProjectRecord) -> IdKey {
        IdKey::new(record.id)
    }
}

/// Sort by complexity rank (Simple = 1 .. Enterprise = 4)
#[derive(Copy, Clone, Debug)]
pub struct ComplexityField;

impl SortFieldMarker for ComplexityField {
    type Key = RankKey;

    fn extract(self, record: &ProjectRecord) -> RankKey {
        RankKey::new(record.complexity_rank())
    }
}
