//! Handler for `POST /api/v1/auth/login/verify`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{SessionResponse, VerifyLoginRequest};
use crate::handlers::{domain_error_response, validation_error_response};

/// Finish a login: verifies the OTP for the user from the login step and
/// returns a full session token.
pub async fn verify_login<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<VerifyLoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .verify_login_otp(request.user_id, &request.otp)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(SessionResponse {
            message: "Login successful".to_string(),
            token: session.token,
            user: session.user,
        }),
        Err(e) => domain_error_response(&e),
    }
}
