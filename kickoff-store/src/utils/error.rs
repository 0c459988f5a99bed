//! Unified error handling
//!
//! [`AppError`] is the error type crossing the library boundary. Lower
//! layers keep their own error enums ([`RepoError`], [`JwtError`],
//! [`StoreError`]) and convert on the way out.

use crate::auth::JwtError;
use crate::db::StoreError;
use crate::db::repository::RepoError;

/// Result type for library-level operations
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum
///
/// # Error classes
///
/// | Class | Meaning |
/// |-------|---------|
/// | Auth | not logged in, token expired, invalid token |
/// | Business | resource missing, conflict, validation failure |
/// | System | storage error, internal error, invalid request |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== Business logic ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Invalid request: {0}")]
    Invalid(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict(resource.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Unified credentials error, same message for unknown email and
    /// wrong password to prevent account enumeration
    pub fn invalid_credentials() -> Self {
        Self::Invalid("Invalid email or password".to_string())
    }
}

// ========== Conversions from lower layers ==========

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::ExpiredToken => AppError::TokenExpired,
            JwtError::InvalidSignature | JwtError::InvalidToken(_) => AppError::InvalidToken,
            JwtError::GenerationFailed(msg) => AppError::Internal(msg),
        }
    }
}
