use thiserror::Error;

use crate::RecordId;

/// Errors that can occur when interacting with a record store.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// A record with the same identifier is already stored.
    #[error("Record already exists: {0}")]
    AlreadyExists(RecordId),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, RecordStoreError>;
