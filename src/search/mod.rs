//! Keyword search over the catalog
//!
//! Narrows the browse surface to definitions whose label contains the typed
//! keyword, and narrows a choice list the same way.

pub mod filter;

pub use filter::{filter_catalog, filter_choices, match_choice};
