pub mod error;

use crate::models::{ConfigSource, FolioConfig};
use anyhow::Context;
use error::ConfigLoadError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "FOLIO_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FolioConfig,
    pub source: ConfigSource,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Resolves configuration. Evaluation order:
/// 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
/// 2) `$FOLIO_CONFIG_JSON` (inline JSON),
/// 3) the first existing well-known file under the base directory,
/// 4) defaults.
pub struct ConfigLoader {
    env: EnvLookup,
    base_dir: PathBuf,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Loader reading the process environment, rooted at the current
    /// directory.
    pub fn from_process_env() -> Self {
        Self {
            env: Box::new(|key| env::var(key).ok()),
            base_dir: PathBuf::from("."),
        }
    }

    /// Loader with an explicit variable lookup and base directory.
    pub fn new(
        env: impl Fn(&str) -> Option<String> + 'static,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            env: Box::new(env),
            base_dir: base_dir.into(),
        }
    }

    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        if let Some(path_str) = self.var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let config = load_from_file(&path)?;
            return finish(config, ConfigSource::EnvPath(path));
        }

        if let Some(raw) = self.var(CONFIG_JSON_VAR) {
            let config = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return finish(config, ConfigSource::EnvInline);
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return finish(config, ConfigSource::File(path));
        }

        finish(FolioConfig::default(), ConfigSource::Default)
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.trim().is_empty())
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}

fn finish(
    config: FolioConfig,
    source: ConfigSource,
) -> anyhow::Result<ConfigLoad> {
    validate(&config)?;
    debug!(?source, "resolved folio configuration");
    Ok(ConfigLoad { config, source })
}

fn validate(config: &FolioConfig) -> Result<(), ConfigLoadError> {
    if config.log_filter.trim().is_empty() {
        return Err(ConfigLoadError::EmptyLogFilter);
    }
    Ok(())
}

/// Read a TOML or JSON config file. Relative `catalog_path` values are
/// resolved against the file's directory.
pub fn load_from_file(path: &Path) -> anyhow::Result<FolioConfig> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    let parse_error = |message: String| ConfigLoadError::Parse {
        origin: origin.clone(),
        message,
    };

    let extension = path.extension().and_then(|ext| ext.to_str());
    let mut config: FolioConfig = match extension {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| parse_error(err.to_string()))?,
        Some("toml") | Some("tml") => toml::from_str(&contents)
            .map_err(|err| parse_error(err.to_string()))?,
        _ => parse_from_str(&contents, &origin)?,
    };

    if let Some(catalog) = config.catalog_path.as_mut()
        && catalog.is_relative()
        && let Some(parent) = path.parent()
    {
        *catalog = parent.join(&*catalog);
    }

    Ok(config)
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<FolioConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(raw: &str) -> Result<FolioConfig, ConfigLoadError> {
    serde_json::from_str(raw)
        .map_err(|source| ConfigLoadError::InlineJson { source })
}
