//! Authentication request/response payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use og_core::domain::value_objects::UserSummary;

/// Body for `POST /auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Phone number in E.164 format, e.g. "+15551234567"
    #[validate(length(min = 8, max = 16))]
    pub phone: String,

    /// Optional email to reserve up front; uniqueness is enforced either
    /// way at profile completion
    #[validate(email)]
    pub email: Option<String>,
}

/// Body for `POST /auth/signup/verify`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifySignupRequest {
    #[validate(length(min = 8, max = 16))]
    pub phone: String,

    /// 6-digit one-time code
    #[validate(length(equal = 6))]
    pub otp: String,
}

/// Body for `POST /auth/login`; exactly one identity reference is used,
/// email taking precedence when both are present
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 16))]
    pub phone: Option<String>,
}

/// Body for `POST /auth/login/verify`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyLoginRequest {
    pub user_id: Uuid,

    #[validate(length(equal = 6))]
    pub otp: String,
}

/// Body for `POST /auth/mpin/set`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetMpinRequest {
    pub user_id: Uuid,

    /// 4-digit MPIN; digit-only format is enforced by the service
    #[validate(length(equal = 4))]
    pub mpin: String,
}

/// Body for `POST /auth/mpin/login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MpinLoginRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 16))]
    pub phone: Option<String>,

    #[validate(length(equal = 4))]
    pub mpin: String,
}

/// Generic acknowledgement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for a verified signup: the new account plus a provisional
/// token for the profile completion step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupVerifiedResponse {
    pub message: String,
    pub user_id: Uuid,
    pub token: String,
    pub mpin_set: bool,
}

/// Response for a started login: OTP delivery is underway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginStartedResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// Response carrying a full session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}
