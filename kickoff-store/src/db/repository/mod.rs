//! Repository Module
//!
//! Typed CRUD operations per collection over the redb store. Replaces
//! query-text dispatch with explicit functions; callers pass the
//! [`Store`](crate::db::Store) handle into every operation.

// Accounts
pub mod user;

// League
pub mod player;
pub mod team;

// Registration inboxes
pub mod registration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::StoreError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::TransactionError> for RepoError {
    fn from(err: redb::TransactionError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::TableError> for RepoError {
    fn from(err: redb::TableError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::StorageError> for RepoError {
    fn from(err: redb::StorageError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::CommitError> for RepoError {
    fn from(err: redb::CommitError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// JSON-encode a record for storage
pub(crate) fn encode<T: Serialize>(value: &T) -> RepoResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a stored record
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> RepoResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Fresh string id for a new record
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
