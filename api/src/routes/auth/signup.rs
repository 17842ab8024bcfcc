//! Handler for `POST /api/v1/auth/signup`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, SignupRequest};
use crate::handlers::{domain_error_response, validation_error_response};

/// Start a signup: checks uniqueness and sends an OTP to the phone.
///
/// Responds 200 with an acknowledgement; the code itself travels out of
/// band. 400 when the phone is malformed or already registered.
pub async fn signup<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<SignupRequest>,
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
        .signup(&request.phone, request.email.as_deref())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "Verification code sent to your phone",
        )),
        Err(e) => domain_error_response(&e),
    }
}
