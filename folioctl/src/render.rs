//! Plain-text rendering of query results, facets and project details.

use folio_core::query::{CountSummary, Facets};
use folio_model::{FilterDimension, ProjectRecord};
use std::fmt::Write as _;
use std::sync::Arc;

const MISSING: &str = "-";

pub fn result_rows(
    records: &[Arc<ProjectRecord>],
    counts: CountSummary,
) -> String {
    let mut out = String::new();
    for record in records {
        let marker = if record.featured { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {:>4}  {:<32} {} | {} | {}",
            record.id.get(),
            record.title,
            dimension(record, FilterDimension::Type),
            dimension(record, FilterDimension::Industry),
            dimension(record, FilterDimension::Complexity),
        );
    }
    if records.is_empty() {
        out.push_str("No projects match the current search and filters.\n");
    }
    let _ = writeln!(out, "{counts}");
    out
}

pub fn facet_listing<T>(
    facets: &Facets,
    records: &[T],
    show_counts: bool,
) -> String
where
    T: std::borrow::Borrow<ProjectRecord>,
{
    let mut out = String::new();
    for &dimension in FilterDimension::all() {
        let _ = writeln!(out, "{}:", dimension.label());
        for row in facets.rows(dimension, records) {
            if show_counts {
                let _ = writeln!(out, "  {} ({})", row.value, row.count);
            } else {
                let _ = writeln!(out, "  {}", row.value);
            }
        }
    }
    out
}

pub fn project_details(record: &ProjectRecord) -> String {
    let details = &record.details;
    let mut out = String::new();

    let _ = writeln!(out, "#{} {}", record.id, record.title);
    if record.featured {
        out.push_str("Featured\n");
    }
    let _ = writeln!(
        out,
        "{} | {} | {}",
        dimension(record, FilterDimension::Type),
        dimension(record, FilterDimension::Industry),
        dimension(record, FilterDimension::Complexity),
    );
    let _ = writeln!(out, "Tech: {}", record.tech_stack.join(", "));
    out.push('\n');
    let _ = writeln!(
        out,
        "{}",
        details.full_description.as_deref().unwrap_or(&record.description)
    );

    if let Some(timeline) = &details.timeline {
        let _ = writeln!(out, "Timeline: {timeline}");
    }
    if let Some(team_size) = details.team_size {
        let _ = writeln!(out, "Team size: {team_size}");
    }
    if let Some(role) = &details.role {
        let _ = writeln!(out, "Role: {role}");
    }
    if let Some(url) = &details.demo_url {
        let _ = writeln!(out, "Demo: {url}");
    }
    if let Some(url) = &details.github_url {
        let _ = writeln!(out, "Source: {url}");
    }

    if !details.metrics.is_empty() {
        out.push_str("\nMetrics:\n");
        for metric in &details.metrics {
            let _ = write!(out, "  {} {}", metric.value, metric.label);
            if let Some(improvement) = &metric.improvement {
                let _ = write!(out, " ({improvement})");
            }
            out.push('\n');
        }
    }

    if !details.key_features.is_empty() {
        out.push_str("\nKey features:\n");
        for feature in &details.key_features {
            let _ = writeln!(out, "  - {feature}");
        }
    }

    if !details.challenges.is_empty() {
        out.push_str("\nChallenges:\n");
        for challenge in &details.challenges {
            let _ = writeln!(
                out,
                "  - {}: {}",
                challenge.title, challenge.solution
            );
        }
    }

    out
}

fn dimension(record: &ProjectRecord, dimension: FilterDimension) -> &str {
    record.dimension_value(dimension).unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::query::FacetBuilder;
    use folio_model::{Complexity, ProjectDetails, ProjectId, ProjectMetric};

    fn record(id: u32, title: &str) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            title: title.to_string(),
            description: "Short".into(),
            project_type: Some("API".into()),
            complexity: Some(Complexity::Medium),
            ..Default::default()
        }
    }

    #[test]
    fn rows_show_missing_values_and_status_line() {
        let records = vec![Arc::new(ProjectRecord {
            featured: true,
            ..record(5, "Wallet")
        })];
        let text = result_rows(
            &records,
            CountSummary {
                total: 6,
                filtered: 1,
            },
        );

        assert!(text.starts_with("*    5  Wallet"));
        assert!(text.contains("API | - | Medium"));
        assert!(text.ends_with("Showing 1 of 6 projects\n"));
    }

    #[test]
    fn empty_results_say_so() {
        let text = result_rows(&[], CountSummary::default());
        assert!(text.contains("No projects match"));
        assert!(text.contains("Showing 0 of 0 projects"));
    }

    #[test]
    fn facet_listing_respects_count_toggle() {
        let records = vec![record(1, "A"), record(2, "B")];
        let facets = FacetBuilder::build(&records);

        let with_counts = facet_listing(&facets, &records, true);
        assert!(with_counts.contains("Project Type:\n  API (2)\n"));

        let without = facet_listing(&facets, &records, false);
        assert!(without.contains("Complexity:\n  Medium\n"));
        assert!(without.contains("Industry:\n"));
    }

    #[test]
    fn details_prefer_full_description() {
        let project = ProjectRecord {
            details: ProjectDetails {
                full_description: Some("Long form".into()),
                team_size: Some(4),
                metrics: vec![ProjectMetric {
                    kind: "performance".into(),
                    value: "40%".into(),
                    label: "Faster".into(),
                    improvement: Some("+40%".into()),
                }],
                ..Default::default()
            },
            ..record(3, "Ledger")
        };

        let text = project_details(&project);
        assert!(text.starts_with("#3 Ledger\n"));
        assert!(text.contains("Long form"));
        assert!(!text.contains("Short"));
        assert!(text.contains("Team size: 4"));
        assert!(text.contains("40% Faster (+40%)"));
    }
}
