//! Handler for `POST /api/v1/auth/login`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginStartedResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Start a login by email or phone; an OTP goes to the account's phone
/// either way.
pub async fn login<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<LoginRequest>,
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
        .login(request.email.as_deref(), request.phone.as_deref())
        .await
    {
        Ok(started) => HttpResponse::Ok().json(LoginStartedResponse {
            message: "Verification code sent to your phone".to_string(),
            user_id: started.user_id,
        }),
        Err(e) => domain_error_response(&e),
    }
}
