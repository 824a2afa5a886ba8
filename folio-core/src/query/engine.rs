//! The query engine: search, then filter, then sort.
//!
//! The stage order is fixed. Evaluation is a pure function of its inputs and
//! never fails; an empty result is a valid outcome.

use super::filtering::{SearchMatcher, apply_filters, apply_search};
use super::sorting::apply_sort;
use super::types::QueryState;
use folio_model::ProjectRecord;
use std::borrow::Borrow;

/// Evaluates query snapshots against a record collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// Ordered records admitted by `state`.
    ///
    /// `T` is usually `Arc<ProjectRecord>` so results share the catalog's
    /// entries, but plain records work as well.
    pub fn evaluate<T>(records: &[T], state: &QueryState) -> Vec<T>
    where
        T: Borrow<ProjectRecord> + Clone,
    {
        let matcher = SearchMatcher::from_state(state);
        let searched = apply_search(records, &matcher);
        let mut filtered = apply_filters(searched, &state.selections);
        apply_sort(&mut filtered, state.sort_mode);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStateBuilder;
    use folio_model::{Complexity, FilterDimension, ProjectId, SortMode};

    fn alpha_beta() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord {
                id: ProjectId(1),
                title: "Alpha".into(),
                industry: Some("Finance".into()),
                complexity: Some(Complexity::Complex),
                featured: false,
                ..Default::default()
            },
            ProjectRecord {
                id: ProjectId(2),
                title: "Beta".into(),
                industry: Some("Finance".into()),
                complexity: Some(Complexity::Enterprise),
                featured: true,
                ..Default::default()
            },
        ]
    }

    fn ids(records: &[ProjectRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn empty_query_orders_featured_first() {
        let out = QueryEngine::evaluate(&alpha_beta(), &QueryState::new());
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn search_selects_single_record() {
        let state = QueryState::new().with_search_term("beta");
        assert_eq!(ids(&QueryEngine::evaluate(&alpha_beta(), &state)), vec![2]);
    }

    #[test]
    fn industry_filter_with_complexity_sort() {
        let state = QueryStateBuilder::new()
            .with_industry("Finance")
            .sort_by(SortMode::Complexity)
            .build();
        assert_eq!(
            ids(&QueryEngine::evaluate(&alpha_beta(), &state)),
            vec![2, 1]
        );
    }

    #[test]
    fn unknown_filter_value_yields_empty_view() {
        let state = QueryState::new()
            .with_filter_selection(FilterDimension::Type, ["NoSuchType"]);
        assert!(QueryEngine::evaluate(&alpha_beta(), &state).is_empty());
    }

    #[test]
    fn search_and_filter_must_both_admit_a_record() {
        // Both titles contain "a"; only Alpha passes the complexity filter.
        let state = QueryStateBuilder::new()
            .search("a")
            .with_complexity(Complexity::Complex)
            .build();
        assert_eq!(ids(&QueryEngine::evaluate(&alpha_beta(), &state)), vec![1]);

        // Beta passes the filter but not the search.
        let state = QueryStateBuilder::new()
            .search("alp")
            .with_industry("Finance")
            .build();
        assert_eq!(ids(&QueryEngine::evaluate(&alpha_beta(), &state)), vec![1]);
    }
}
