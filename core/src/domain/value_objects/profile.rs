//! Profile projection and update payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::ValidationError;

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_dob(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Read projection of a user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: Option<String>,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub dob: Option<NaiveDate>,
    pub pic_url: Option<String>,
    pub mpin_set: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            phone: user.phone.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            name: user.full_name(),
            country: user.country.clone(),
            state: user.state.clone(),
            city: user.city.clone(),
            dob: user.dob,
            pic_url: user.pic_url.clone(),
            mpin_set: user.mpin_set(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Payload for the one-time profile completion step after signup
///
/// `dob` is an ISO-8601 calendar date string; it is parsed by the service
/// so a malformed value surfaces as a typed validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub dob: Option<String>,
    pub pic_url: Option<String>,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub dob: Option<String>,
    pub pic_url: Option<String>,
}
