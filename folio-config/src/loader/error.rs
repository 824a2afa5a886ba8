use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {origin}: {message}")]
    Parse {
        origin: String,
        message: String,
    },
    #[error("invalid FOLIO_CONFIG_JSON")]
    InlineJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("log_filter must not be empty")]
    EmptyLogFilter,
}
