//! Domain-specific error types for authentication and related operations
//!
//! Each error maps to a stable machine-readable code via `ErrorResponse`;
//! the HTTP layer decides the status class.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("User already exists with this email or phone")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("User not verified. Please complete signup first")]
    UserNotVerified,

    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("MPIN not set. Please set MPIN first")]
    MpinNotSet,

    #[error("Invalid MPIN")]
    InvalidMpin,

    #[error("Email already in use")]
    EmailTaken,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("MPIN must be a 4-digit number")]
    InvalidMpinFormat,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid date")]
    InvalidDate,
}

/// Unified error payload for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let code = match err {
            AuthError::InvalidPhoneFormat { .. } => "INVALID_PHONE_FORMAT",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::UserNotVerified => "USER_NOT_VERIFIED",
            AuthError::InvalidOtp => "INVALID_OTP",
            AuthError::MpinNotSet => "MPIN_NOT_SET",
            AuthError::InvalidMpin => "INVALID_MPIN",
            AuthError::EmailTaken => "EMAIL_TAKEN",
        };
        ErrorResponse::new(code, err.to_string())
    }
}

impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let code = match err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidClaims => "INVALID_CLAIMS",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };
        ErrorResponse::new(code, err.to_string())
    }
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        let code = match err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidMpinFormat => "INVALID_MPIN_FORMAT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidDate => "INVALID_DATE",
        };
        ErrorResponse::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_codes() {
        let response: ErrorResponse = (&AuthError::InvalidOtp).into();
        assert_eq!(response.error, "INVALID_OTP");
        assert!(response.message.contains("OTP"));
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = ValidationError::RequiredField {
            field: "phone".to_string(),
        };
        assert!(err.to_string().contains("phone"));
    }
}
