use serde::Serialize;
use std::fmt;

/// Catalog size next to the size of the current result view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub total: usize,
    pub filtered: usize,
}

impl CountSummary {
    pub fn summarize<T, U>(records: &[T], filtered_view: &[U]) -> Self {
        Self {
            total: records.len(),
            filtered: filtered_view.len(),
        }
    }

    /// Whether the view hides part of the catalog.
    pub fn is_narrowed(&self) -> bool {
        self.filtered < self.total
    }
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} projects", self.filtered, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_counts_both_slices() {
        let summary = CountSummary::summarize(&[1, 2, 3], &[2]);
        assert_eq!(
            summary,
            CountSummary {
                total: 3,
                filtered: 1,
            }
        );
        assert!(summary.is_narrowed());
        assert_eq!(summary.to_string(), "Showing 1 of 3 projects");
    }

    #[test]
    fn empty_view_is_a_valid_summary() {
        let summary = CountSummary::summarize::<u8, u8>(&[], &[]);
        assert_eq!(summary.total, 0);
        assert!(!summary.is_narrowed());
    }
}
