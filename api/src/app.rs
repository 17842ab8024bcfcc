//! Application state and factory

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use og_core::repositories::{OtpRepository, UserRepository};
use og_core::services::auth::AuthService;
use og_core::services::otp::SmsSender;
use og_core::services::token::TokenService;
use og_core::services::user::UserService;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{
    complete_profile, login, mpin_login, set_mpin, signup, verify_login, verify_signup,
};
use crate::routes::user::{get_profile, update_profile};

/// Shared services injected into every handler
pub struct AppState<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
{
    pub auth_service: Arc<AuthService<U, O, S>>,
    pub user_service: Arc<UserService<U>>,
    pub token_service: Arc<TokenService>,
}

/// Create and configure the application with all routes and middleware
pub fn create_app<U, O, S>(
    app_state: web::Data<AppState<U, O, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    S: SmsSender + 'static,
{
    let jwt = JwtAuth::new(app_state.token_service.clone());
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, O, S>))
                        .route("/signup/verify", web::post().to(verify_signup::<U, O, S>))
                        .route(
                            "/signup/complete",
                            web::post()
                                .to(complete_profile::<U, O, S>)
                                .wrap(jwt.clone()),
                        )
                        .route("/login", web::post().to(login::<U, O, S>))
                        .route("/login/verify", web::post().to(verify_login::<U, O, S>))
                        .route("/mpin/set", web::post().to(set_mpin::<U, O, S>))
                        .route("/mpin/login", web::post().to(mpin_login::<U, O, S>)),
                )
                .service(
                    web::scope("/user")
                        .wrap(jwt)
                        .route("/profile", web::get().to(get_profile::<U, O, S>))
                        .route("/profile", web::put().to(update_profile::<U, O, S>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otpgate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found",
    }))
}
