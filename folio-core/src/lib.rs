//! # Folio Core
//!
//! Core library for Folio, the project-portfolio catalog. It owns the
//! immutable project catalog and the query engine that turns a catalog plus a
//! user-driven [`query::QueryState`] into the ordered list of projects to
//! display.
//!
//! ## Overview
//!
//! - [`catalog`]: the [`CatalogStore`], loaded once and never mutated
//! - [`query`]: search, filter and sort stages, facets and count summaries
//! - [`session`]: the owner of the current query snapshot and its memoized view
//!
//! ## Feature Flags
//!
//! - `demo`: ships the built-in six-project catalog via [`CatalogStore::demo`]
//!
//! ## Examples
//!
//! ```
//! use folio_core::{CatalogStore, query::{QueryEngine, QueryStateBuilder}};
//! use folio_core::model::{ProjectId, ProjectRecord, SortMode};
//!
//! let catalog = CatalogStore::from_records(vec![
//!     ProjectRecord {
//!         id: ProjectId(1),
//!         title: "Alpha".into(),
//!         ..Default::default()
//!     },
//!     ProjectRecord {
//!         id: ProjectId(2),
//!         title: "Beta".into(),
//!         ..Default::default()
//!     },
//! ])
//! .unwrap();
//!
//! let state = QueryStateBuilder::new().sort_by(SortMode::Newest).build();
//! let ids: Vec<u32> = QueryEngine::evaluate(catalog.records(), &state)
//!     .iter()
//!     .map(|record| record.id.get())
//!     .collect();
//! assert_eq!(ids, vec![2, 1]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Immutable project catalog
pub mod catalog;

/// Search, filter, sort, facet and count derivation
pub mod query;

/// Snapshot publication and memoized query views
pub mod session;

/// Re-export of the shared data model
pub use folio_model as model;

pub use catalog::{CatalogError, CatalogStore};
pub use session::{QuerySession, QueryView, SessionError};
