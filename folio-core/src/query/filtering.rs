//! Search and filter stages of the query pipeline.
//!
//! Both stages only ever drop records; they never reorder. Search runs first
//! over the whole catalog, filtering runs over the search survivors:
//!
//! - search: the lower-cased term must be a substring of the lower-cased
//!   title, description, industry, or any tech-stack entry; a blank term
//!   admits everything
//! - filter: every dimension with a non-empty selection must contain the
//!   record's value for that dimension (AND across dimensions, OR within one)
//!
//! Missing attributes never match and never fail.

use super::types::{FilterSelections, QueryState};
use folio_model::ProjectRecord;
use std::borrow::Borrow;

/// Prepared case-insensitive substring matcher for one search term.
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    needle: Option<String>,
}

impl SearchMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            needle: (!term.trim().is_empty()).then(|| term.to_lowercase()),
        }
    }

    pub fn from_state(state: &QueryState) -> Self {
        Self {
            needle: state.normalized_search(),
        }
    }

    /// A blank term admits every record.
    pub fn is_unrestricted(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let hit = |text: &str| text.to_lowercase().contains(needle);

        hit(&record.title)
            || hit(&record.description)
            || record.industry.as_deref().is_some_and(hit)
            || record.tech_stack.iter().any(|tech| hit(tech))
    }
}

/// Whether `record` satisfies every active dimension of `selections`.
pub fn matches_selections(
    record: &ProjectRecord,
    selections: &FilterSelections,
) -> bool {
    selections.active().all(|(dimension, values)| {
        record
            .dimension_value(dimension)
            .is_some_and(|value| values.contains(value))
    })
}

/// Stage 1: keep records matching the search term, in input order.
pub fn apply_search<T>(records: &[T], matcher: &SearchMatcher) -> Vec<T>
where
    T: Borrow<ProjectRecord> + Clone,
{
    if matcher.is_unrestricted() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matcher.matches((*record).borrow()))
        .cloned()
        .collect()
}

/// Stage 2: keep records admitted by every active filter, in input order.
pub fn apply_filters<T>(
    records: Vec<T>,
    selections: &FilterSelections,
) -> Vec<T>
where
    T: Borrow<ProjectRecord>,
{
    if selections.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches_selections(record.borrow(), selections))
        .collect()
}
