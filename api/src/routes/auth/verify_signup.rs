//! Handler for `POST /api/v1/auth/signup/verify`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{SignupVerifiedResponse, VerifySignupRequest};
use crate::handlers::{domain_error_response, validation_error_response};

/// Finish a signup: verifies the OTP, creates the account and returns a
/// provisional token for the profile completion step.
pub async fn verify_signup<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<VerifySignupRequest>,
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
        .verify_signup_otp(&request.phone, &request.otp)
        .await
    {
        Ok(verified) => HttpResponse::Ok().json(SignupVerifiedResponse {
            message: "Signup verified; complete your profile".to_string(),
            user_id: verified.user_id,
            token: verified.token,
            mpin_set: verified.mpin_set,
        }),
        Err(e) => domain_error_response(&e),
    }
}
