//! Handler for `POST /api/v1/auth/mpin/set`

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::otp::SmsSender;

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, SetMpinRequest};
use crate::handlers::{domain_error_response, validation_error_response};

/// Set or replace the 4-digit MPIN for a verified account.
pub async fn set_mpin<U, O, S>(
    state: web::Data<AppState<U, O, S>>,
    request: web::Json<SetMpinRequest>,
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
        .set_mpin(request.user_id, &request.mpin)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("MPIN set successfully")),
        Err(e) => domain_error_response(&e),
    }
}
