use crate::query::{FacetBuilder, Facets, QueryEngine, QueryState};
use folio_model::{ProjectId, ProjectRecord};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("duplicate project id {id}")]
    DuplicateId { id: ProjectId },
}

/// The fixed project collection, established once at startup.
///
/// There is no mutation API and the store is not `Clone`: share it behind an
/// `Arc` instead of copying it. Records are individually reference counted so
/// query results point at catalog entries rather than duplicating them.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<Arc<ProjectRecord>>,
    index: HashMap<ProjectId, usize>,
}

impl CatalogStore {
    /// Build a store, keeping input order. Fails on a repeated id.
    pub fn from_records(
        records: Vec<ProjectRecord>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: record.id });
            }
            if let Some(complexity) = &record.complexity
                && !complexity.is_recognized()
            {
                warn!(
                    id = %record.id,
                    label = complexity.as_str(),
                    "project has an unrecognized complexity label; \
                     it will rank last"
                );
            }
        }

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// Parse a JSON array of catalog records.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents =
            fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            projects = catalog.len(),
            "loaded project catalog"
        );
        Ok(catalog)
    }

    /// The built-in six-project portfolio catalog.
    #[cfg(feature = "demo")]
    #[cfg_attr(docsrs, doc(cfg(feature = "demo")))]
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json_str(include_str!("../data/demo_catalog.json"))
    }

    pub fn records(&self) -> &[Arc<ProjectRecord>] {
        &self.records
    }

    pub fn get(&self, id: ProjectId) -> Option<&Arc<ProjectRecord>> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().map(|record| &**record)
    }

    pub fn facets(&self) -> Facets {
        FacetBuilder::build(&self.records)
    }

    /// Evaluate `state` against the whole catalog.
    pub fn query(&self, state: &QueryState) -> Vec<Arc<ProjectRecord>> {
        QueryEngine::evaluate(&self.records, state)
    }
}
