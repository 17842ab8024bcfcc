//! User entity representing a registered account in the OtpGate system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
///
/// A row is created only after the signup OTP has been verified, with
/// placeholder identity fields; email and names are filled in by the
/// profile completion step. Email and phone are each globally unique
/// (email only once it is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, lowercase; `None` until profile completion
    pub email: Option<String>,

    /// Phone number in E.164 format
    pub phone: String,

    /// First name; empty placeholder until profile completion
    pub first_name: String,

    /// Last name; empty placeholder until profile completion
    pub last_name: String,

    /// bcrypt hash of the MPIN; set only through explicit MPIN setup
    pub mpin_hash: Option<String>,

    /// Whether the account is verified and active
    pub is_active: bool,

    /// Optional profile fields
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub dob: Option<NaiveDate>,
    pub pic_url: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with placeholder identity fields,
    /// as done when a signup OTP verifies successfully.
    pub fn new(phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: None,
            phone,
            first_name: String::new(),
            last_name: String::new(),
            mpin_hash: None,
            is_active: true,
            country: None,
            state: None,
            city: None,
            dob: None,
            pic_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether an MPIN has been set for this account
    pub fn mpin_set(&self) -> bool {
        self.mpin_hash.is_some()
    }

    /// Stores the email, normalized to lowercase
    pub fn set_email(&mut self, email: &str) {
        self.email = Some(email.trim().to_lowercase());
        self.updated_at = Utc::now();
    }

    /// Stores a hashed MPIN
    pub fn set_mpin_hash(&mut self, hash: String) {
        self.mpin_hash = Some(hash);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_placeholder() {
        let user = User::new("+15551234567".to_string());

        assert_eq!(user.phone, "+15551234567");
        assert!(user.email.is_none());
        assert!(user.first_name.is_empty());
        assert!(user.is_active);
        assert!(!user.mpin_set());
        assert_eq!(user.full_name(), "");
    }

    #[test]
    fn test_set_email_lowercases() {
        let mut user = User::new("+15551234567".to_string());
        user.set_email(" Jane.Doe@Example.COM ");
        assert_eq!(user.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_full_name() {
        let mut user = User::new("+15551234567".to_string());
        user.first_name = "Jane".to_string();
        user.last_name = "Doe".to_string();
        assert_eq!(user.full_name(), "Jane Doe");
    }

    #[test]
    fn test_mpin_set() {
        let mut user = User::new("+15551234567".to_string());
        assert!(!user.mpin_set());
        user.set_mpin_hash("$2b$10$hash".to_string());
        assert!(user.mpin_set());
    }
}
