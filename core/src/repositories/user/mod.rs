//! User repository trait defining the interface for user persistence.

pub mod mock;

pub use mock::MockUserRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database access while keeping the
/// abstraction boundary between domain and infrastructure layers.
/// Email lookups are case-insensitive; callers pass emails in any case.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// Fails with a conflict when the phone or email is already taken;
    /// the unique indexes are the final arbiter for concurrent signups.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user matching either identity reference
    ///
    /// Email takes precedence when both are supplied.
    async fn find_by_email_or_phone(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        if let Some(email) = email {
            return self.find_by_email(email).await;
        }
        if let Some(phone) = phone {
            return self.find_by_phone(phone).await;
        }
        Ok(None)
    }

    /// Persist updated fields of an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check whether an email is owned by a user other than `exclude`
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DomainError> {
        Ok(self
            .find_by_email(email)
            .await?
            .map(|u| Some(u.id) != exclude)
            .unwrap_or(false))
    }
}
