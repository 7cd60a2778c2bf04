//! Two-way binding between a filter set and the host location
//!
//! Filter changes always reset pagination to the first page and are written
//! with `replace`, so filtering never grows the history. External navigation
//! re-derives the filter set without writing back.

use super::codec::{DEFAULT_KEY, UrlCodec};
use super::error::CodecError;
use super::location::Location;
use super::pagination::{DEFAULT_PAGE_SIZE, Pagination};
use super::query::QueryParams;
use crate::catalog::Catalog;
use crate::filters::AppliedFilter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for URL synchronization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSyncOptions {
    /// Query parameter holding the filters
    pub key: String,
    /// Page size used when the location has none
    pub default_page_size: u32,
}

impl Default for UrlSyncOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// State derived from the location
#[derive(Debug)]
pub struct Rehydrated {
    /// Filter set to install
    pub filters: Vec<AppliedFilter>,
    /// Pagination cursor
    pub pagination: Pagination,
    /// Decode failure that caused a fallback, if any
    pub error: Option<CodecError>,
}

/// Keeps a filter set and pagination in step with a [`Location`]
#[derive(Debug)]
pub struct UrlSync<L: Location> {
    codec: UrlCodec,
    location: L,
    pagination: Pagination,
    last_query: Option<String>,
}

impl<L: Location> UrlSync<L> {
    /// Bind a location
    pub fn new(catalog: Arc<Catalog>, location: L, options: UrlSyncOptions) -> Self {
        let codec = UrlCodec::new(catalog)
            .with_key(options.key)
            .with_default_page_size(options.default_page_size);
        Self {
            codec,
            location,
            pagination: Pagination::new(1, options.default_page_size),
            last_query: None,
        }
    }

    /// Codec used for reads and writes
    pub const fn codec(&self) -> &UrlCodec {
        &self.codec
    }

    /// Bound location
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Bound location, mutably
    ///
    /// Changes made here are picked up by the next [`Self::location_changed`].
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Release the location
    pub fn into_location(self) -> L {
        self.location
    }

    /// Current pagination cursor
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Derive the initial filter set and pagination from the location
    pub fn hydrate(&mut self, initial: &[AppliedFilter]) -> Rehydrated {
        let search = self.location.search();
        let rehydrated = self.read(&search, initial);
        self.last_query = Some(search);
        rehydrated
    }

    /// Write a changed filter set, returning to the first page
    pub fn filters_changed(&mut self, filters: &[AppliedFilter]) {
        self.pagination = self.pagination.first_page();
        let mut params = self.current_params();
        self.codec.write_filters(&mut params, filters);
        self.codec.write_pagination(&mut params, self.pagination);
        self.write(&params);
    }

    /// Move to another page without touching the filters
    pub fn update_pagination(&mut self, pagination: Pagination) {
        self.pagination = pagination;
        let mut params = self.current_params();
        self.codec.write_pagination(&mut params, pagination);
        self.write(&params);
    }

    /// React to navigation the component did not cause
    ///
    /// Returns `None` when the location still holds the last query this sync
    /// read or wrote. Never writes to the location.
    pub fn location_changed(&mut self, initial: &[AppliedFilter]) -> Option<Rehydrated> {
        let search = self.location.search();
        if self.last_query.as_deref() == Some(search.as_str()) {
            debug!("location unchanged since last sync");
            return None;
        }
        let rehydrated = self.read(&search, initial);
        self.last_query = Some(search);
        Some(rehydrated)
    }

    fn read(&mut self, search: &str, initial: &[AppliedFilter]) -> Rehydrated {
        let params = match QueryParams::parse(search) {
            Ok(params) => params,
            Err(err) => {
                warn!(error = %err, "failed to parse location query");
                self.pagination = self.codec.read_pagination(&QueryParams::new());
                return Rehydrated {
                    filters: initial.to_vec(),
                    pagination: self.pagination,
                    error: Some(err),
                };
            }
        };
        let decoded = self.codec.read_filters(&params, initial);
        self.pagination = self.codec.read_pagination(&params);
        Rehydrated {
            filters: decoded.filters,
            pagination: self.pagination,
            error: decoded.error,
        }
    }

    fn current_params(&self) -> QueryParams {
        QueryParams::parse(&self.location.search()).unwrap_or_default()
    }

    fn write(&mut self, params: &QueryParams) {
        let query = params.to_query_string();
        debug!(%query, "replacing location");
        self.location.replace(&query);
        self.last_query = Some(query);
    }
}
