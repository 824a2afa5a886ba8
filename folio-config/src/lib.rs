//! Shared configuration library for Folio.
//!
//! Loads [`FolioConfig`] from a file named by the environment, inline JSON, a
//! well-known file in the working directory, or built-in defaults, and reports
//! which of those produced it.

#![allow(missing_docs)]

pub mod loader;
pub mod models;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{ConfigSource, FolioConfig};
