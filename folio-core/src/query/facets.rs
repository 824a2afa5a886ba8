//! Facet derivation: the distinct values each filter dimension takes across
//! the catalog, used to populate filter controls.

use folio_model::{FilterDimension, ProjectRecord};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Distinct values per dimension, each list in first-seen catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    #[serde(rename = "type")]
    project_type: Vec<String>,
    industry: Vec<String>,
    complexity: Vec<String>,
}

impl Facets {
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Type => &self.project_type,
            FilterDimension::Industry => &self.industry,
            FilterDimension::Complexity => &self.complexity,
        }
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        FilterDimension::all()
            .iter()
            .all(|dimension| self.values(*dimension).is_empty())
    }

    /// Count, for every facet value of `dimension`, how many of `records`
    /// carry it. Rows follow facet order and include zero counts.
    pub fn rows<T>(
        &self,
        dimension: FilterDimension,
        records: &[T],
    ) -> Vec<FacetRow>
    where
        T: Borrow<ProjectRecord>,
    {
        self.values(dimension)
            .iter()
            .map(|value| {
                let count = records
                    .iter()
                    .filter(|record| {
                        let record: &ProjectRecord = (*record).borrow();
                        record.dimension_value(dimension)
                            == Some(value.as_str())
                    })
                    .count();
                FacetRow::new(value.clone(), count)
            })
            .collect()
    }

    fn values_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::Type => &mut self.project_type,
            FilterDimension::Industry => &mut self.industry,
            FilterDimension::Complexity => &mut self.complexity,
        }
    }
}

/// Represents a single facet value with the number of matching records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRow {
    pub value: String,
    pub count: usize,
}

impl FacetRow {
    /// Create a new [`FacetRow`] with the provided `value` and `count`.
    #[must_use]
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Builds [`Facets`] from a record collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetBuilder;

impl FacetBuilder {
    pub fn build<T>(records: &[T]) -> Facets
    where
        T: Borrow<ProjectRecord>,
    {
        let mut facets = Facets::default();
        for dimension in FilterDimension::all().iter().copied() {
            let mut seen = HashSet::new();
            let values = facets.values_mut(dimension);
            for record in records {
                let record: &ProjectRecord = record.borrow();
                if let Some(value) = record.dimension_value(dimension)
                    && seen.insert(value)
                {
                    values.push(value.to_string());
                }
            }
        }
        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{Complexity, ProjectId};

    fn project(
        id: u32,
        project_type: Option<&str>,
        industry: Option<&str>,
        complexity: Option<&str>,
    ) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            project_type: project_type.map(str::to_string),
            industry: industry.map(str::to_string),
            complexity: complexity.map(Complexity::from),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<ProjectRecord> {
        vec![
            project(1, Some("Webpage"), Some("Fashion"), Some("Enterprise")),
            project(2, Some("Web App"), Some("Healthcare"), Some("Enterprise")),
            project(3, Some("Web App"), None, Some("Complex")),
            project(4, Some("API"), Some(""), None),
            project(5, None, Some("Healthcare"), Some("Legendary")),
        ]
    }

    #[test]
    fn collects_distinct_values_in_first_seen_order() {
        let facets = FacetBuilder::build(&catalog());

        assert_eq!(
            facets.values(FilterDimension::Type),
            ["Webpage", "Web App", "API"]
        );
        assert_eq!(
            facets.values(FilterDimension::Industry),
            ["Fashion", "Healthcare"]
        );
        assert_eq!(
            facets.values(FilterDimension::Complexity),
            ["Enterprise", "Complex", "Legendary"]
        );
    }

    #[test]
    fn empty_catalog_has_no_facets() {
        let facets = FacetBuilder::build::<ProjectRecord>(&[]);
        assert!(facets.is_empty());
    }

    #[test]
    fn rows_count_against_any_record_slice() {
        let records = catalog();
        let facets = FacetBuilder::build(&records);

        let rows = facets.rows(FilterDimension::Type, &records);
        assert_eq!(
            rows,
            vec![
                FacetRow::new("Webpage", 1),
                FacetRow::new("Web App", 2),
                FacetRow::new("API", 1),
            ]
        );

        let subset = &records[..1];
        let rows = facets.rows(FilterDimension::Industry, subset);
        assert_eq!(
            rows,
            vec![FacetRow::new("Fashion", 1), FacetRow::new("Healthcare", 0)]
        );
        assert!(facets.contains(FilterDimension::Industry, "Healthcare"));
        assert!(!facets.contains(FilterDimension::Industry, ""));
    }
}
