use folio_model::SortMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Settings shared by Folio front ends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    /// JSON catalog to load. When unset, front ends fall back to the built-in
    /// demo catalog. Relative paths resolve against the config file's
    /// directory.
    pub catalog_path: Option<PathBuf>,
    /// Sort mode of the first snapshot. The page itself starts on
    /// `featured`; change this to open on a different ordering.
    pub default_sort: SortMode,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Print per-value counts next to facet values.
    pub show_facet_counts: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortMode::Featured,
            log_filter: "warn".to_string(),
            show_facet_counts: true,
        }
    }
}
