//! URL state: filters and pagination in the query string
//!
//! # Format
//!
//! ```text
//! ?filters={"status":{"value":"running","label":"Status","displayValue":"Running"}}&pageNum=2&pageSize=20
//! ```
//!
//! The `filters` value is percent-encoded JSON. Older flat-map and bare-array
//! layouts are read but never written.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use filterbar::catalog::{Catalog, FilterDefinition};
//! use filterbar::url::{QueryParams, UrlCodec};
//!
//! let catalog = Arc::new(Catalog::new(vec![FilterDefinition::text("name", "Name")]).unwrap());
//! let codec = UrlCodec::new(catalog);
//! let params = QueryParams::parse(r#"?filters={"name":"foo"}&pageNum=3"#).unwrap();
//!
//! let decoded = codec.read_filters(&params, &[]);
//! assert_eq!(decoded.filters[0].display_value, "foo");
//! assert_eq!(codec.read_pagination(&params).page_num, 3);
//! ```

pub mod codec;
pub mod error;
pub mod location;
pub mod pagination;
pub mod query;
pub mod sync;

pub use codec::{DEFAULT_KEY, Decoded, Format, UrlCodec, filter_params};
pub use error::CodecError;
pub use location::{Location, MemoryLocation};
pub use pagination::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE, PAGE_NUM_PARAM, PAGE_SIZE_PARAM, Pagination};
pub use query::QueryParams;
pub use sync::{Rehydrated, UrlSync, UrlSyncOptions};
