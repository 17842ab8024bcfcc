//! Handler for `POST /api/v1/auth/signup/complete`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::user::{CompleteProfileRequest, ProfileResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;

/// Fill in the identity fields of the freshly created account.
///
/// Authenticated with the provisional token from signup verification;
/// the target user is the token subject, never a body field.
pub async fn complete_profile<U, O, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<CompleteProfileRequest>,
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
        .complete_profile(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(ProfileResponse {
            message: "Profile completed".to_string(),
            user: profile,
        }),
        Err(e) => domain_error_response(&e),
    }
}
