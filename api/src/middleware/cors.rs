//! CORS configuration
//!
//! Permissive in development; production restricts origins to the
//! comma-separated `ALLOWED_ORIGINS` list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Build a CORS middleware for the current environment.
///
/// # Environment variables
/// - `ENVIRONMENT`: "production" switches to the restricted policy
/// - `ALLOWED_ORIGINS`: comma-separated origin allowlist (production)
/// - `CORS_MAX_AGE`: preflight cache lifetime in seconds (default 3600)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age);

    if environment == "production" {
        let allowed = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        allowed
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    } else {
        cors.allow_any_origin()
    }
}
