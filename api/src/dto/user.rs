//! Profile request/response payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

use og_core::domain::value_objects::{CompleteProfile, ProfileUpdate, UserProfile};

/// Body for `POST /auth/signup/complete`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompleteProfileRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    /// ISO-8601 calendar date, e.g. "1990-04-01"
    pub dob: Option<String>,

    #[validate(url)]
    pub pic_url: Option<String>,
}

impl From<CompleteProfileRequest> for CompleteProfile {
    fn from(req: CompleteProfileRequest) -> Self {
        CompleteProfile {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            country: req.country,
            state: req.state,
            city: req.city,
            dob: req.dob,
            pic_url: req.pic_url,
        }
    }
}

/// Body for `PUT /user/profile`; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    pub dob: Option<String>,

    #[validate(url)]
    pub pic_url: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            country: req.country,
            state: req.state,
            city: req.city,
            dob: req.dob,
            pic_url: req.pic_url,
        }
    }
}

/// Response wrapping a profile projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserProfile,
}
