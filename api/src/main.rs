//! OtpGate API server binary
//!
//! Loads configuration from the environment, builds the database pool
//! and the service graph, then serves the actix-web application.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use og_api::app::{create_app, AppState};
use og_core::services::auth::{AuthService, AuthServiceConfig};
use og_core::services::otp::OtpService;
use og_core::services::token::{TokenConfig, TokenService};
use og_core::services::user::UserService;
use og_infra::{create_pool, LogSmsSender, MySqlOtpRepository, MySqlUserRepository};
use og_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OtpGate API server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the insecure default secret");
    }

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let otp_repository = Arc::new(MySqlOtpRepository::new(pool));
    let sms_sender = Arc::new(LogSmsSender::new());

    let token_service = Arc::new(TokenService::new(TokenConfig::from(config.auth.jwt.clone())));
    let otp_service = Arc::new(OtpService::new(otp_repository, sms_sender, config.auth.otp));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        otp_service,
        token_service.clone(),
        AuthServiceConfig {
            mpin_bcrypt_cost: config.auth.mpin_bcrypt_cost,
        },
    ));
    let user_service = Arc::new(UserService::new(user_repository));

    let state = web::Data::new(AppState {
        auth_service,
        user_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Listening on {}", bind_address);

    let workers = config.server.workers;
    let server = HttpServer::new(move || create_app(state.clone()));
    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await
}
