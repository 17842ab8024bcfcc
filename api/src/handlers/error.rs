//! DomainError to HTTP response mapping

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use og_core::errors::{AuthError, DomainError, ErrorResponse};

/// Map a domain error to its HTTP status code.
///
/// Precondition failures (bad input, conflicts, unverified accounts,
/// wrong or stale codes) are 400s; failed authentication proofs and
/// token problems are 401s; unknown resources 404; everything the
/// client cannot fix is a 500.
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(auth) => match auth {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidMpin => StatusCode::UNAUTHORIZED,
            AuthError::InvalidPhoneFormat { .. }
            | AuthError::UserAlreadyExists
            | AuthError::UserNotVerified
            | AuthError::InvalidOtp
            | AuthError::MpinNotSet
            | AuthError::EmailTaken => StatusCode::BAD_REQUEST,
        },
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Render a domain error as a JSON error response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        log::error!("Request failed: {}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }
    HttpResponse::build(status).json(ErrorResponse::from(error))
}

/// Render DTO validation failures as a 400 with per-field details
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let details: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let codes: Vec<&str> = field_errors.iter().map(|e| e.code.as_ref()).collect();
            format!("{}: {}", field, codes.join(", "))
        })
        .collect();

    HttpResponse::BadRequest().json(ErrorResponse::new(
        "VALIDATION_ERROR",
        format!("Invalid request data ({})", details.join("; ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_core::errors::{TokenError, ValidationError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&AuthError::InvalidOtp.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AuthError::MpinNotSet.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AuthError::InvalidMpin.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&AuthError::UserNotFound.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&TokenError::TokenExpired.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&ValidationError::InvalidMpinFormat.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Database {
                message: "pool exhausted".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
