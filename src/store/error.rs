//! Error type for item store operations.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item id sequence exhausted")]
    SequenceExhausted,
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound(id.into())
    }
}
