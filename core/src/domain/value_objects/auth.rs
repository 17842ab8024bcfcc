//! Authentication outcome value objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Compact user payload returned alongside a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User id
    pub id: Uuid,

    /// Email address, if the profile has been completed
    pub email: Option<String>,

    /// Full display name
    pub name: String,

    /// Whether an MPIN has been set
    pub mpin_set: bool,
}

impl UserSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.full_name(),
            mpin_set: user.mpin_set(),
        }
    }
}

/// Outcome of a verified signup OTP: the freshly created account and a
/// provisional session token for profile completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupVerified {
    /// Id of the newly created user
    pub user_id: Uuid,

    /// Provisional session token
    pub token: String,

    /// Always false for a brand-new account; kept for client symmetry
    pub mpin_set: bool,
}

/// Outcome of a login request: the OTP has been issued and delivery
/// triggered, verification is still pending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginStarted {
    /// Id of the user the OTP was issued for
    pub user_id: Uuid,
}

/// A fully authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Signed session token
    pub token: String,

    /// Summary of the authenticated user
    pub user: UserSummary,
}
