//! Sort key types for comparing project records

use super::traits::SortKey;
use folio_model::ProjectId;

/// Numeric id key, used for "newest first" ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct IdKey(ProjectId);

impl IdKey {
    pub fn new(id: ProjectId) -> Self {
        IdKey(id)
    }
}

impl SortKey for IdKey {}

/// Complexity rank key. Rank 0 stands for a missing or unrecognized label and
/// always sorts after ranked records, whichever direction is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey(u8);

impl RankKey {
    pub fn new(rank: u8) -> Self {
        RankKey(rank)
    }
}

impl SortKey for RankKey {
    fn is_missing(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn missing_rank_sorts_last_in_both_directions() {
        let missing = RankKey::new(0);
        let simple = RankKey::new(1);

        assert_eq!(
            missing.compare_with_order(&simple, false),
            Ordering::Greater
        );
        assert_eq!(
            missing.compare_with_order(&simple, true),
            Ordering::Greater
        );
        assert_eq!(
            missing.compare_with_order(&RankKey::new(0), true),
            Ordering::Equal
        );
    }

    #[test]
    fn reverse_flips_present_keys() {
        let low = IdKey::new(ProjectId(1));
        let high = IdKey::new(ProjectId(2));
        assert_eq!(low.compare_with_order(&high, false), Ordering::Less);
        assert_eq!(low.compare_with_order(&high, true), Ordering::Greater);
    }
}
