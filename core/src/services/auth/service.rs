//! Main authentication service implementation
//!
//! Drives the per-user state machine
//! `unregistered -> pending_verification -> verified/active [-> mpin_set]`.
//! Each operation is a sequence of precondition checks against the
//! credential store followed by a delegation to the OTP engine or the
//! token issuer; no state is shared across requests beyond the store.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use og_shared::utils::phone::{is_valid_phone, mask_phone};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{
    AuthSession, CompleteProfile, LoginStarted, SignupVerified, UserProfile, UserSummary,
};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{OtpRepository, UserRepository};
use crate::services::otp::{OtpService, SmsSender};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

static MPIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Authentication service for the complete signup/login flow
pub struct AuthService<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
{
    /// User repository for credential store access
    user_repository: Arc<U>,
    /// OTP engine for code issuance and verification
    otp_service: Arc<OtpService<O, S>>,
    /// Token issuer for session tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, O, S> AuthService<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SmsSender,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<O, S>>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
            config,
        }
    }

    /// Start a signup by issuing an OTP against the bare phone number.
    ///
    /// No user row is created yet; that happens at verification time.
    /// Fails with `UserAlreadyExists` when the phone, or the optional
    /// email, is already taken. The check and the OTP issuance are not
    /// atomic; uniqueness is re-checked in [`Self::verify_signup_otp`]
    /// and the store's unique indexes settle concurrent races.
    pub async fn signup(&self, phone: &str, email: Option<&str>) -> DomainResult<()> {
        if !is_valid_phone(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone(phone),
            }
            .into());
        }

        if self.user_repository.find_by_phone(phone).await?.is_some() {
            warn!(phone = %mask_phone(phone), "Signup rejected: phone already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        if let Some(email) = email {
            if self.user_repository.email_taken(email, None).await? {
                return Err(AuthError::UserAlreadyExists.into());
            }
        }

        self.otp_service.issue(phone).await?;
        info!(phone = %mask_phone(phone), "Signup OTP issued");
        Ok(())
    }

    /// Verify a signup OTP, create the user row and hand out a
    /// provisional session token for profile completion.
    pub async fn verify_signup_otp(&self, phone: &str, code: &str) -> DomainResult<SignupVerified> {
        self.otp_service.verify(phone, code).await?;

        // Re-check uniqueness: a concurrent signup may have won the race
        // between the initial check and this verification.
        if self.user_repository.find_by_phone(phone).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = self.user_repository.create(User::new(phone.to_string())).await?;
        let token = self.token_service.issue(user.id, None)?;

        info!(user_id = %user.id, phone = %mask_phone(phone), "Signup verified, user created");

        Ok(SignupVerified {
            user_id: user.id,
            token,
            mpin_set: false,
        })
    }

    /// Fill in the placeholder identity fields after signup.
    ///
    /// Requires an authenticated caller; fails with `EmailTaken` when the
    /// email belongs to a different user.
    pub async fn complete_profile(
        &self,
        user_id: Uuid,
        profile: CompleteProfile,
    ) -> DomainResult<UserProfile> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if profile.email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        if self
            .user_repository
            .email_taken(&profile.email, Some(user_id))
            .await?
        {
            return Err(AuthError::EmailTaken.into());
        }

        user.set_email(&profile.email);
        user.first_name = profile.first_name;
        user.last_name = profile.last_name;
        user.country = profile.country;
        user.state = profile.state;
        user.city = profile.city;
        user.pic_url = profile.pic_url;
        if let Some(dob) = profile.dob.as_deref() {
            user.dob = Some(crate::domain::value_objects::profile::parse_dob(dob)?);
        }

        let user = self.user_repository.update(user).await?;
        info!(user_id = %user.id, "Profile completed");
        Ok(UserProfile::from_user(&user))
    }

    /// Start a login by issuing a fresh OTP against the user's phone.
    ///
    /// Exactly one identity reference (email or phone) is required.
    pub async fn login(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> DomainResult<LoginStarted> {
        if email.is_none() && phone.is_none() {
            return Err(ValidationError::RequiredField {
                field: "email or phone".to_string(),
            }
            .into());
        }

        let user = self
            .user_repository
            .find_by_email_or_phone(email, phone)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active {
            return Err(AuthError::UserNotVerified.into());
        }

        self.otp_service.issue(&user.phone).await?;
        info!(user_id = %user.id, "Login OTP issued");

        Ok(LoginStarted { user_id: user.id })
    }

    /// Verify a login OTP and issue a session token.
    pub async fn verify_login_otp(&self, user_id: Uuid, code: &str) -> DomainResult<AuthSession> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.otp_service.verify(&user.phone, code).await?;

        let token = self.token_service.issue(user.id, user.email.clone())?;
        info!(user_id = %user.id, "Login verified, session issued");

        Ok(AuthSession {
            token,
            user: UserSummary::from_user(&user),
        })
    }

    /// Hash and store a 4-digit MPIN for a verified user.
    ///
    /// The raw MPIN is never persisted or logged.
    pub async fn set_mpin(&self, user_id: Uuid, mpin: &str) -> DomainResult<()> {
        if !MPIN_REGEX.is_match(mpin) {
            return Err(ValidationError::InvalidMpinFormat.into());
        }

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active {
            return Err(AuthError::UserNotVerified.into());
        }

        let hash = bcrypt::hash(mpin, self.config.mpin_bcrypt_cost).map_err(|e| {
            DomainError::Internal {
                message: format!("MPIN hashing failed: {}", e),
            }
        })?;

        user.set_mpin_hash(hash);
        self.user_repository.update(user).await?;
        info!(user_id = %user_id, "MPIN set");
        Ok(())
    }

    /// Authenticate with an identity reference and MPIN.
    ///
    /// A missing identity or MPIN, and an account without an MPIN, are
    /// precondition failures; a wrong MPIN is an authentication failure
    /// and surfaces as `InvalidMpin` (401-class).
    pub async fn login_with_mpin(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
        mpin: &str,
    ) -> DomainResult<AuthSession> {
        if email.is_none() && phone.is_none() {
            return Err(ValidationError::RequiredField {
                field: "email or phone".to_string(),
            }
            .into());
        }
        if mpin.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "mpin".to_string(),
            }
            .into());
        }

        let user = self
            .user_repository
            .find_by_email_or_phone(email, phone)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let hash = user.mpin_hash.as_deref().ok_or(AuthError::MpinNotSet)?;

        let matches = bcrypt::verify(mpin, hash).map_err(|e| DomainError::Internal {
            message: format!("MPIN comparison failed: {}", e),
        })?;
        if !matches {
            warn!(user_id = %user.id, "MPIN login failed: wrong MPIN");
            return Err(AuthError::InvalidMpin.into());
        }

        let token = self.token_service.issue(user.id, user.email.clone())?;
        info!(user_id = %user.id, "MPIN login successful");

        Ok(AuthSession {
            token,
            user: UserSummary::from_user(&user),
        })
    }
}
