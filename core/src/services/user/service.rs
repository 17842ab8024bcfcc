//! User profile service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::value_objects::profile::{parse_dob, ProfileUpdate, UserProfile};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;

/// Service for reading and updating user profiles
///
/// The one-time profile completion step lives on the auth service; this
/// handles everything after it.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Fetch the profile projection for a user
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(UserProfile::from_user(&user))
    }

    /// Apply a partial profile update; `None` fields stay untouched.
    ///
    /// A changed email must not belong to another user; the phone number
    /// is immutable here since it anchors the OTP flows.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> DomainResult<UserProfile> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(email) = update.email.as_deref() {
            if self
                .user_repository
                .email_taken(email, Some(user_id))
                .await?
            {
                return Err(AuthError::EmailTaken.into());
            }
            user.set_email(email);
        }

        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(country) = update.country {
            user.country = Some(country);
        }
        if let Some(state) = update.state {
            user.state = Some(state);
        }
        if let Some(city) = update.city {
            user.city = Some(city);
        }
        if let Some(dob) = update.dob.as_deref() {
            user.dob = Some(parse_dob(dob)?);
        }
        if let Some(pic_url) = update.pic_url {
            user.pic_url = Some(pic_url);
        }

        let user = self.user_repository.update(user).await?;
        info!(user_id = %user.id, "Profile updated");
        Ok(UserProfile::from_user(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;
    use crate::errors::{DomainError, ValidationError};
    use crate::repositories::MockUserRepository;

    async fn seeded() -> (Arc<MockUserRepository>, Uuid) {
        let repo = Arc::new(MockUserRepository::new());
        let mut user = User::new("+15551234567".to_string());
        user.set_email("alice@example.com");
        user.first_name = "Alice".to_string();
        user.last_name = "Smith".to_string();
        let id = user.id;
        repo.create(user).await.unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn test_get_profile() {
        let (repo, id) = seeded().await;
        let service = UserService::new(repo);

        let profile = service.get_profile(id).await.unwrap();
        assert_eq!(profile.name, "Alice Smith");
        assert_eq!(profile.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_get_profile_unknown_user() {
        let (repo, _) = seeded().await;
        let service = UserService::new(repo);

        let err = service.get_profile(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_partial_update_leaves_other_fields() {
        let (repo, id) = seeded().await;
        let service = UserService::new(repo);

        let profile = service
            .update_profile(
                id,
                ProfileUpdate {
                    city: Some("Portland".to_string()),
                    dob: Some("1990-04-01".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.city.as_deref(), Some("Portland"));
        assert_eq!(profile.first_name, "Alice");
        assert_eq!(profile.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_update_own_email_is_allowed() {
        let (repo, id) = seeded().await;
        let service = UserService::new(repo);

        // Re-submitting the current address is not a collision.
        let profile = service
            .update_profile(
                id,
                ProfileUpdate {
                    email: Some("ALICE@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_update_email_collision() {
        let (repo, id) = seeded().await;
        let mut other = User::new("+15559876543".to_string());
        other.set_email("bob@example.com");
        repo.create(other).await.unwrap();

        let service = UserService::new(repo);
        let err = service
            .update_profile(
                id,
                ProfileUpdate {
                    email: Some("bob@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_dob() {
        let (repo, id) = seeded().await;
        let service = UserService::new(repo);

        let err = service
            .update_profile(
                id,
                ProfileUpdate {
                    dob: Some("April 1 1990".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::InvalidDate)
        ));
    }
}
