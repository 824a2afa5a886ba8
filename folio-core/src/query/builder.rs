use super::types::QueryState;
use folio_model::{Complexity, FilterDimension, SortMode};

/// Fluent API for building query snapshots
#[derive(Debug, Clone, Default)]
pub struct QueryStateBuilder {
    state: QueryState,
}

impl QueryStateBuilder {
    /// Start from the initial snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn from_state(state: &QueryState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    // === Search methods ===

    /// Set the free-text search term
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.state.search_term = text.into();
        self
    }

    // === Filter methods ===

    /// Add one value to a dimension's selection set
    pub fn select(
        mut self,
        dimension: FilterDimension,
        value: impl Into<String>,
    ) -> Self {
        self.state.selections.get_mut(dimension).insert(value.into());
        self
    }

    /// Filter by project type
    pub fn with_type(self, project_type: impl Into<String>) -> Self {
        self.select(FilterDimension::Type, project_type)
    }

    /// Filter by industry
    pub fn with_industry(self, industry: impl Into<String>) -> Self {
        self.select(FilterDimension::Industry, industry)
    }

    /// Filter by complexity label
    pub fn with_complexity(self, complexity: impl Into<Complexity>) -> Self {
        let label = String::from(complexity.into());
        self.select(FilterDimension::Complexity, label)
    }

    // === Sort methods ===

    pub fn sort_by(mut self, mode: SortMode) -> Self {
        self.state.sort_mode = mode;
        self
    }

    // === Build method ===

    pub fn build(self) -> QueryState {
        self.state
    }
}
