//! Utility functions for sorting operations
//!
//! In-place reordering helpers shared by the sort strategies.

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` tells us which element from the original slice
/// should be at that position.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut temp = Vec::with_capacity(items.len());
    for &idx in indices {
        debug_assert!(idx < items.len(), "Index out of bounds");
        temp.push(items[idx].clone());
    }

    items.clone_from_slice(&temp);
}

/// Stable partition: items for which the predicate returns true come first
///
/// Returns the index where the second group starts.
pub fn partition_by<T, F>(items: &mut [T], mut predicate: F) -> usize
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let (mut front, back): (Vec<T>, Vec<T>) =
        items.iter().cloned().partition(|item| predicate(item));
    let partition_point = front.len();

    front.extend(back);
    items.clone_from_slice(&front);
    partition_point
}
