//! JWT authentication middleware
//!
//! Extracts the bearer token from the Authorization header, validates it
//! through the core token service, and injects an [`AuthContext`] into
//! the request extensions. Protected handlers receive the context via
//! its `FromRequest` implementation; requests without a valid token are
//! rejected with a 401 before the handler runs.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use og_core::domain::entities::token::Claims;
use og_core::errors::ErrorResponse;
use og_core::services::token::TokenService;

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the token subject
    pub user_id: Uuid,
    /// Email claim, absent for provisional tokens issued before profile
    /// completion
    pub email: Option<String>,
    /// Token id, useful for request correlation in logs
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Result<Self, Error> {
        let user_id = claims
            .user_id()
            .map_err(|_| unauthorized("INVALID_TOKEN", "Token subject is not a valid user id"))?;
        Ok(Self {
            user_id,
            email: claims.email,
            jti: claims.jti,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            unauthorized("UNAUTHORIZED", "Authentication required")
        }))
    }
}

fn unauthorized(code: &str, message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(ErrorResponse::new(code, message)),
    )
    .into()
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Create a middleware factory bound to a token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let token = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_owned);

            let token = match token {
                Some(token) => token,
                None => {
                    return Err(unauthorized(
                        "UNAUTHORIZED",
                        "Missing or malformed Authorization header",
                    ))
                }
            };

            let claims = match token_service.decode(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::debug!("Token rejected: {}", e);
                    return Err(unauthorized("INVALID_TOKEN", "Token is invalid or expired"));
                }
            };

            let context = AuthContext::from_claims(claims)?;
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}
