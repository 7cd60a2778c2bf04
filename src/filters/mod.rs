//! Applied filters
//!
//! This module holds the committed side of a filter bar:
//!
//! - **`FilterValue`**: the closed value variant, one constructor per kind
//! - **`AppliedFilter`**: a committed criterion keyed by `option_id`
//! - **`AppliedFilterStore`**: the ordered, key-unique collection with
//!   upsert/remove/reset semantics and controlled or uncontrolled ownership
//!
//! # Examples
//!
//! ```
//! use filterbar::filters::{AppliedFilter, AppliedFilterStore, FilterValue};
//!
//! let mut store = AppliedFilterStore::uncontrolled(Vec::new());
//! store.upsert(AppliedFilter::new("name", "Name", FilterValue::Text("foo".into()), "foo"));
//! store.upsert(AppliedFilter::new("name", "Name", FilterValue::Text("bar".into()), "bar"));
//! assert_eq!(store.len(), 1);
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{AppliedFilterStore, ListenerId, StoreMode};
pub use types::{AppliedFilter, FilterValue};
