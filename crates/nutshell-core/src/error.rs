use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors reported by a [`RecordStore`][crate::store::RecordStore] backend.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("hash already exists: {0}")]
    Duplicate(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the [`ShortLinks`][crate::links::ShortLinks] operations.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("hash already exists: {0}")]
    DuplicateHash(String),
    #[error("no record for hash: {0}")]
    NotFound(String),
    #[error("cannot save updates: {0}")]
    SaveFailed(#[source] StoreError),
    #[error("invalid hash: {0}")]
    InvalidHash(String),
    #[error("store error: {0}")]
    Store(#[source] StoreError),
}
