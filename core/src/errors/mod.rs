//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, ErrorResponse, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ErrorResponse::new("NOT_FOUND", err.to_string()),
            DomainError::Unauthorized => ErrorResponse::new("UNAUTHORIZED", err.to_string()),
            DomainError::Database { .. } => {
                // Internal details stay out of client-facing payloads
                ErrorResponse::new("DATABASE_ERROR", "Database error")
            }
            DomainError::Internal { .. } => ErrorResponse::new("INTERNAL_ERROR", "Internal error"),
            DomainError::Auth(e) => e.into(),
            DomainError::Token(e) => e.into(),
            DomainError::ValidationErr(e) => e.into(),
        }
    }
}
