//! Error types for catalog construction and loading

use std::io;
use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two definitions share the same id
    #[error("Duplicate filter definition id '{0}'")]
    DuplicateId(String),

    /// A definition has an empty id
    #[error("Filter definition with label '{0}' has an empty id")]
    EmptyId(String),

    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog file could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
