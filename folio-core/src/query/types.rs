use folio_model::{FilterDimension, SortMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable snapshot of the user-driven query inputs.
///
/// Transitions never edit a snapshot; each `with_*` method returns a new one,
/// so a published snapshot can be shared freely between readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    /// Raw search text as typed, possibly empty or padded.
    pub search_term: String,
    pub selections: FilterSelections,
    pub sort_mode: SortMode,
}

impl QueryState {
    /// Initial snapshot: empty search, no filters, featured ordering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(&self, text: impl Into<String>) -> Self {
        Self {
            search_term: text.into(),
            ..self.clone()
        }
    }

    /// Replace the selection set for one dimension, leaving the others as
    /// they were.
    pub fn with_filter_selection<I, S>(
        &self,
        dimension: FilterDimension,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selections = self.selections.clone();
        *selections.get_mut(dimension) =
            values.into_iter().map(Into::into).collect();
        Self {
            selections,
            ..self.clone()
        }
    }

    pub fn with_sort_mode(&self, sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..self.clone()
        }
    }

    /// Reset search and filters. The sort mode is kept.
    pub fn cleared(&self) -> Self {
        Self {
            sort_mode: self.sort_mode,
            ..Self::default()
        }
    }

    /// Lower-cased search needle; `None` when the term is blank. Only the
    /// blank check trims, the needle keeps any surrounding whitespace.
    pub fn normalized_search(&self) -> Option<String> {
        if self.search_term.trim().is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }

    /// Whether search or any filter currently restricts the catalog.
    pub fn has_active_query(&self) -> bool {
        self.normalized_search().is_some() || !self.selections.is_empty()
    }
}

/// Selected values per filter dimension. An empty set places no restriction
/// on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelections {
    #[serde(rename = "type")]
    pub project_type: BTreeSet<String>,
    pub industry: BTreeSet<String>,
    pub complexity: BTreeSet<String>,
}

impl FilterSelections {
    pub fn get(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::Type => &self.project_type,
            FilterDimension::Industry => &self.industry,
            FilterDimension::Complexity => &self.complexity,
        }
    }

    pub fn get_mut(
        &mut self,
        dimension: FilterDimension,
    ) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::Type => &mut self.project_type,
            FilterDimension::Industry => &mut self.industry,
            FilterDimension::Complexity => &mut self.complexity,
        }
    }

    /// True when no dimension restricts anything.
    pub fn is_empty(&self) -> bool {
        FilterDimension::all()
            .iter()
            .all(|dimension| self.get(*dimension).is_empty())
    }

    /// Dimensions with a non-empty selection, in [`FilterDimension::all`]
    /// order.
    pub fn active(
        &self,
    ) -> impl Iterator<Item = (FilterDimension, &BTreeSet<String>)> + '_ {
        FilterDimension::all()
            .iter()
            .map(move |dimension| (*dimension, self.get(*dimension)))
            .filter(|(_, values)| !values.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_is_unrestricted_featured() {
        let state = QueryState::new();
        assert!(state.search_term.is_empty());
        assert!(state.selections.is_empty());
        assert_eq!(state.sort_mode, SortMode::Featured);
        assert!(!state.has_active_query());
    }

    #[test]
    fn transitions_leave_the_source_snapshot_untouched() {
        let original = QueryState::new();
        let searched = original.with_search_term("react");
        let filtered = searched
            .with_filter_selection(FilterDimension::Industry, ["Finance"]);

        assert!(original.search_term.is_empty());
        assert!(searched.selections.is_empty());
        assert_eq!(filtered.search_term, "react");
        assert!(filtered.selections.industry.contains("Finance"));
    }

    #[test]
    fn filter_selection_replaces_only_its_dimension() {
        let state = QueryState::new()
            .with_filter_selection(FilterDimension::Type, ["API"])
            .with_filter_selection(FilterDimension::Industry, ["Finance"])
            .with_filter_selection(
                FilterDimension::Type,
                ["Web App", "Webpage"],
            );

        let types: Vec<&str> =
            state.selections.project_type.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Web App", "Webpage"]);
        assert_eq!(state.selections.industry.len(), 1);
    }

    #[test]
    fn cleared_keeps_sort_mode() {
        let state = QueryState::new()
            .with_search_term("node")
            .with_filter_selection(FilterDimension::Complexity, ["Complex"])
            .with_sort_mode(SortMode::Newest)
            .cleared();

        assert_eq!(state.sort_mode, SortMode::Newest);
        assert!(!state.has_active_query());
    }

    #[test]
    fn blank_search_is_not_active() {
        let state = QueryState::new().with_search_term("   ");
        assert_eq!(state.normalized_search(), None);
        assert!(!state.has_active_query());
        assert_eq!(
            state
                .with_search_term("  ReAct ")
                .normalized_search()
                .as_deref(),
            Some("  react ")
        );
    }

    #[test]
    fn active_dimensions_skip_empty_sets() {
        let state = QueryState::new()
            .with_filter_selection(FilterDimension::Complexity, ["Medium"])
            .with_filter_selection(FilterDimension::Type, Vec::<String>::new());
        let active: Vec<FilterDimension> =
            state.selections.active().map(|(dimension, _)| dimension).collect();
        assert_eq!(active, vec![FilterDimension::Complexity]);
    }
}
