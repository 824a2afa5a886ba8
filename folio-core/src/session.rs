//! Ownership of the current query snapshot.
//!
//! A [`QuerySession`] is the single writer of [`QueryState`]. Every setter
//! publishes a fresh `Arc<QueryState>` and bumps the generation; published
//! snapshots are never touched again. [`QuerySession::view`] evaluates the
//! engine lazily, at most once per published snapshot, and always against the
//! latest one, so a reader never sees results older than its last write.

use crate::catalog::CatalogStore;
use crate::query::{CountSummary, FacetRow, Facets, QueryEngine, QueryState};
use folio_model::{FilterDimension, ProjectId, ProjectRecord, SortMode};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no project with id {id} in the catalog")]
    UnknownProject { id: ProjectId },
}

/// Engine output for one published snapshot.
#[derive(Debug)]
pub struct QueryView {
    /// Generation of the snapshot this view was computed from.
    pub generation: u64,
    pub state: Arc<QueryState>,
    pub records: Vec<Arc<ProjectRecord>>,
    pub counts: CountSummary,
}

impl QueryView {
    pub fn ids(&self) -> Vec<ProjectId> {
        self.records.iter().map(|record| record.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug)]
pub struct QuerySession {
    catalog: Arc<CatalogStore>,
    facets: Arc<Facets>,
    state: Arc<QueryState>,
    generation: u64,
    view: Option<Arc<QueryView>>,
    selected: Option<ProjectId>,
}

impl QuerySession {
    /// Session over `catalog` starting from the initial snapshot.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self::with_state(catalog, QueryState::new())
    }

    pub fn with_state(catalog: Arc<CatalogStore>, state: QueryState) -> Self {
        let facets = Arc::new(catalog.facets());
        Self {
            catalog,
            facets,
            state: Arc::new(state),
            generation: 0,
            view: None,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    /// Facets of the catalog, built once at construction.
    pub fn facets(&self) -> &Arc<Facets> {
        &self.facets
    }

    /// The most recently published snapshot.
    pub fn state(&self) -> Arc<QueryState> {
        Arc::clone(&self.state)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the current snapshot.
    pub fn publish(&mut self, next: QueryState) -> Arc<QueryState> {
        self.generation += 1;
        self.state = Arc::new(next);
        Arc::clone(&self.state)
    }

    pub fn set_search_term(
        &mut self,
        text: impl Into<String>,
    ) -> Arc<QueryState> {
        let next = self.state.with_search_term(text);
        self.publish(next)
    }

    pub fn set_filter_selection<I, S>(
        &mut self,
        dimension: FilterDimension,
        values: I,
    ) -> Arc<QueryState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = self.state.with_filter_selection(dimension, values);
        self.publish(next)
    }

    /// Add `value` to a dimension's selection, or remove it if already
    /// selected. This is how a filter-bar checkbox drives the session.
    pub fn toggle_filter_value(
        &mut self,
        dimension: FilterDimension,
        value: &str,
    ) -> Arc<QueryState> {
        let mut values = self.state.selections.get(dimension).clone();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        self.set_filter_selection(dimension, values)
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> Arc<QueryState> {
        let next = self.state.with_sort_mode(mode);
        self.publish(next)
    }

    /// Reset search and filters. Sort mode and the detail selection stay.
    pub fn clear_all(&mut self) -> Arc<QueryState> {
        let next = self.state.cleared();
        self.publish(next)
    }

    pub fn has_active_query(&self) -> bool {
        self.state.has_active_query()
    }

    /// Results for the current snapshot, computed on first access after each
    /// publish and shared until the next one.
    pub fn view(&mut self) -> Arc<QueryView> {
        if let Some(view) = &self.view
            && Arc::ptr_eq(&view.state, &self.state)
        {
            return Arc::clone(view);
        }

        let started = Instant::now();
        let records =
            QueryEngine::evaluate(self.catalog.records(), &self.state);
        let counts = CountSummary::summarize(self.catalog.records(), &records);
        debug!(
            generation = self.generation,
            total = counts.total,
            filtered = counts.filtered,
            elapsed_us = started.elapsed().as_micros() as u64,
            "recomputed query view"
        );

        let view = Arc::new(QueryView {
            generation: self.generation,
            state: Arc::clone(&self.state),
            records,
            counts,
        });
        self.view = Some(Arc::clone(&view));
        view
    }

    pub fn counts(&mut self) -> CountSummary {
        self.view().counts
    }

    /// Facet rows for `dimension` counted against the current results.
    pub fn facet_rows(&mut self, dimension: FilterDimension) -> Vec<FacetRow> {
        let view = self.view();
        self.facets.rows(dimension, &view.records)
    }

    // === Detail selection ===

    pub fn select_project(
        &mut self,
        id: ProjectId,
    ) -> Result<Arc<ProjectRecord>, SessionError> {
        let record = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(SessionError::UnknownProject { id })?;
        self.selected = Some(id);
        Ok(record)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_project(&self) -> Option<Arc<ProjectRecord>> {
        self.selected
            .and_then(|id| self.catalog.get(id))
            .cloned()
    }
}
