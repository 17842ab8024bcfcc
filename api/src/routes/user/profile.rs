//! Handlers for `GET`/`PUT /api/v1/user/profile`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::user::{ProfileResponse, UpdateProfileRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;

/// Return the caller's profile projection
pub async fn get_profile<U, O, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, O, S>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
{
    match state.user_service.get_profile(auth.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => domain_error_response(&e),
    }
}

/// Apply a partial update to the caller's profile
pub async fn update_profile<U, O, S>(
    auth: AuthContext,
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<UpdateProfileRequest>,
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
        .user_service
        .update_profile(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(ProfileResponse {
            message: "Profile updated".to_string(),
            user: profile,
        }),
        Err(e) => domain_error_response(&e),
    }
}
