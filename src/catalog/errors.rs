//! # Catalog Errors
//!
//! Error types for catalog operations.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Input rejected before touching the store
    #[error("{0}")]
    Validation(String),

    /// No record with the requested id
    #[error("Id not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store inconsistency after a write
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
