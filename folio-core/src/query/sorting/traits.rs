//! Core traits for sortable project fields
//!
//! A field marker names one attribute of a [`ProjectRecord`] and knows how to
//! extract a comparable key from it. Keys decide how missing data compares.

use folio_model::ProjectRecord;
use std::cmp::Ordering;

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Extract this field's key from a record
    fn extract(self, record: &ProjectRecord) -> Self::Key;
}

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and handle missing data gracefully.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Check if this key represents missing data
    fn is_missing(&self) -> bool {
        false
    }

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}
