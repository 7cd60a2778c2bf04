//! Filterbar - a filter bar state engine with URL persistence
//!
//! This library models a search/filter bar: a catalog of filter definitions,
//! a selection state machine that turns user input into applied filters, an
//! ordered store of those filters, and a codec that keeps them and the
//! pagination cursor in the URL query string.

use thiserror::Error;

pub mod bar;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod filters;
pub mod output;
pub mod search;
pub mod selection;
pub mod url;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FilterbarError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Store error
    #[error("Store error: {0}")]
    StoreError(#[from] filters::StoreError),
    /// Codec error
    #[error("Codec error: {0}")]
    CodecError(#[from] url::CodecError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents a JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use bar::{FilterBar, FilterBarOptions, FilterBarProps, Snapshot};
pub use catalog::{Catalog, FilterDefinition, FilterKind, Scalar};
pub use filters::{AppliedFilter, FilterValue};
