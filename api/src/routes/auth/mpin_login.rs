//! Handler for `POST /api/v1/auth/mpin/login`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{MpinLoginRequest, SessionResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Returning-user shortcut: authenticate with an identity reference and
/// the stored MPIN, skipping OTP delivery. A wrong MPIN is a 401; an
/// account without one gets a 400 pointing at MPIN setup.
pub async fn mpin_login<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<MpinLoginRequest>,
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
        .login_with_mpin(
            request.email.as_deref(),
            request.phone.as_deref(),
            &request.mpin,
        )
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
