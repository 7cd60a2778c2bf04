//! Error types for applied filter operations

use thiserror::Error;

/// Errors that can occur when operating on the applied filter store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An external value was supplied to a store that owns its state
    #[error("Store is uncontrolled; external values cannot be mirrored")]
    NotControlled,
}
