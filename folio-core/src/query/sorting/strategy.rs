//! Strategy pattern for the sorting stage
//!
//! Each strategy reorders a slice in place and is stable: equal elements keep
//! their relative input order.

use super::{SortFieldMarker, SortKey};
use folio_model::ProjectRecord;
use std::borrow::Borrow;

/// A sorting strategy applied to the filtered records
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);
}

/// Single field sort strategy
#[derive(Debug, Clone, Copy)]
pub struct FieldSort<F: SortFieldMarker> {
    pub field: F,
    pub reverse: bool,
}

impl<F: SortFieldMarker> FieldSort<F> {
    /// Create a new field sort strategy
    pub fn new(field: F, reverse: bool) -> Self {
        Self { field, reverse }
    }
}

impl<T, F> SortStrategy<T> for FieldSort<F>
where
    T: Borrow<ProjectRecord> + Clone,
    F: SortFieldMarker,
{
    fn sort(&self, items: &mut [T]) {
        // Extract keys once for efficiency
        let mut keys: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, self.field.extract(item.borrow())))
            .collect();

        // `sort_by` is stable, ties keep input order
        keys.sort_by(|a, b| a.1.compare_with_order(&b.1, self.reverse));

        let indices: Vec<_> = keys.into_iter().map(|(i, _)| i).collect();
        super::utils::reorder_by_indices(items, &indices);
    }
}

/// Featured records first, each partition in its original relative order
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedFirst;

impl<T> SortStrategy<T> for FeaturedFirst
where
    T: Borrow<ProjectRecord> + Clone,
{
    fn sort(&self, items: &mut [T]) {
        super::utils::partition_by(items, |item| {
            let record: &ProjectRecord = item.borrow();
            record.featured
        });
    }
}
