//! Behavioural tests for the auth state machine

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::CompleteProfile;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::UserRepository;

use super::mocks::TestHarness;

const PHONE: &str = "+15551234567";

async fn signed_up(h: &TestHarness) -> Uuid {
    h.auth.signup(PHONE, None).await.unwrap();
    let code = h.sms.last_code().await.unwrap();
    h.auth.verify_signup_otp(PHONE, &code).await.unwrap().user_id
}

fn profile() -> CompleteProfile {
    CompleteProfile {
        email: "Alice@Example.com".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        country: Some("US".to_string()),
        dob: Some("1990-04-01".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_signup_issues_and_delivers_otp() {
    let h = TestHarness::new();

    h.auth.signup(PHONE, None).await.unwrap();

    assert_eq!(h.sms.sent_count().await, 1);
    let stored = h.otps.latest_for(PHONE).await.unwrap();
    assert_eq!(Some(stored.code), h.sms.last_code().await);
    // No user row yet; it is created at verification time.
    assert_eq!(h.users.count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_malformed_phone() {
    let h = TestHarness::new();

    let err = h.auth.signup("0412345", None).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidPhoneFormat { .. })
    ));
    assert_eq!(h.sms.sent_count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_registered_phone() {
    let h = TestHarness::new();
    signed_up(&h).await;

    let err = h.auth.signup(PHONE, None).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
}

#[tokio::test]
async fn test_signup_rejects_taken_email() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;
    h.auth.complete_profile(user_id, profile()).await.unwrap();

    let err = h
        .auth
        .signup("+15559876543", Some("alice@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
}

#[tokio::test]
async fn test_verify_signup_creates_user_and_issues_token() {
    let h = TestHarness::new();

    h.auth.signup(PHONE, None).await.unwrap();
    let code = h.sms.last_code().await.unwrap();
    let verified = h.auth.verify_signup_otp(PHONE, &code).await.unwrap();

    assert!(!verified.mpin_set);
    assert_eq!(h.users.count().await, 1);

    let claims = h.tokens.decode(&verified.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), verified.user_id);
    assert_eq!(claims.email, None);
}

#[tokio::test]
async fn test_verify_signup_wrong_code_creates_nothing() {
    let h = TestHarness::new();

    h.auth.signup(PHONE, None).await.unwrap();
    let err = h.auth.verify_signup_otp(PHONE, "000000").await.unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
    assert_eq!(h.users.count().await, 0);
}

#[tokio::test]
async fn test_verify_signup_code_is_single_use() {
    let h = TestHarness::new();

    h.auth.signup(PHONE, None).await.unwrap();
    let code = h.sms.last_code().await.unwrap();
    h.auth.verify_signup_otp(PHONE, &code).await.unwrap();

    let err = h.auth.verify_signup_otp(PHONE, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
}

#[tokio::test]
async fn test_verify_signup_loses_race_to_concurrent_registration() {
    let h = TestHarness::new();

    h.auth.signup(PHONE, None).await.unwrap();
    let code = h.sms.last_code().await.unwrap();

    // Another request registered the phone before this verification.
    h.users.create(User::new(PHONE.to_string())).await.unwrap();

    let err = h.auth.verify_signup_otp(PHONE, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    assert_eq!(h.users.count().await, 1);
}

#[tokio::test]
async fn test_complete_profile_fills_placeholders() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    let updated = h.auth.complete_profile(user_id, profile()).await.unwrap();

    assert_eq!(updated.email.as_deref(), Some("alice@example.com"));
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.country.as_deref(), Some("US"));
    assert_eq!(updated.dob.unwrap().to_string(), "1990-04-01");
}

#[tokio::test]
async fn test_complete_profile_rejects_taken_email() {
    let h = TestHarness::new();
    let first = signed_up(&h).await;
    h.auth.complete_profile(first, profile()).await.unwrap();

    h.auth.signup("+15559876543", None).await.unwrap();
    let code = h.sms.last_code().await.unwrap();
    let second = h
        .auth
        .verify_signup_otp("+15559876543", &code)
        .await
        .unwrap()
        .user_id;

    let err = h
        .auth
        .complete_profile(second, profile())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::EmailTaken)));
}

#[tokio::test]
async fn test_complete_profile_rejects_malformed_dob() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    let mut payload = profile();
    payload.dob = Some("01/04/1990".to_string());

    let err = h.auth.complete_profile(user_id, payload).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidDate)
    ));
}

#[tokio::test]
async fn test_complete_profile_unknown_user() {
    let h = TestHarness::new();

    let err = h
        .auth
        .complete_profile(Uuid::new_v4(), profile())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_requires_an_identity_reference() {
    let h = TestHarness::new();

    let err = h.auth.login(None, None).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let h = TestHarness::new();

    let err = h.auth.login(None, Some(PHONE)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_by_email_then_verify() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;
    h.auth.complete_profile(user_id, profile()).await.unwrap();

    let started = h
        .auth
        .login(Some("alice@example.com"), None)
        .await
        .unwrap();
    assert_eq!(started.user_id, user_id);

    let code = h.sms.last_code().await.unwrap();
    let session = h.auth.verify_login_otp(user_id, &code).await.unwrap();

    assert_eq!(session.user.id, user_id);
    assert_eq!(session.user.email.as_deref(), Some("alice@example.com"));
    assert!(!session.user.mpin_set);

    let claims = h.tokens.decode(&session.token).unwrap();
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_login_rejects_deactivated_user() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    let mut user = h.users.find_by_id(user_id).await.unwrap().unwrap();
    user.is_active = false;
    h.users.update(user).await.unwrap();

    let err = h.auth.login(None, Some(PHONE)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotVerified)));
}

#[tokio::test]
async fn test_verify_login_otp_wrong_code() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    h.auth.login(None, Some(PHONE)).await.unwrap();
    let err = h.auth.verify_login_otp(user_id, "999999").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
}

#[tokio::test]
async fn test_set_mpin_rejects_non_four_digit_values() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    for bad in ["123", "12345", "12a4", "    "] {
        let err = h.auth.set_mpin(user_id, bad).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::InvalidMpinFormat)
        ));
    }
}

#[tokio::test]
async fn test_set_mpin_then_login_with_mpin() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;

    h.auth.set_mpin(user_id, "1234").await.unwrap();

    let stored = h.users.find_by_id(user_id).await.unwrap().unwrap();
    // The raw MPIN never lands in the store.
    assert_ne!(stored.mpin_hash.as_deref(), Some("1234"));
    assert!(stored.mpin_set());

    let session = h
        .auth
        .login_with_mpin(None, Some(PHONE), "1234")
        .await
        .unwrap();
    assert_eq!(session.user.id, user_id);
    assert!(session.user.mpin_set);
}

#[tokio::test]
async fn test_mpin_login_wrong_mpin() {
    let h = TestHarness::new();
    let user_id = signed_up(&h).await;
    h.auth.set_mpin(user_id, "1234").await.unwrap();

    let err = h
        .auth
        .login_with_mpin(None, Some(PHONE), "4321")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidMpin)));
}

#[tokio::test]
async fn test_mpin_login_without_mpin_set() {
    let h = TestHarness::new();
    signed_up(&h).await;

    let err = h
        .auth
        .login_with_mpin(None, Some(PHONE), "1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::MpinNotSet)));
}

#[tokio::test]
async fn test_mpin_login_requires_identity_and_mpin() {
    let h = TestHarness::new();

    let err = h.auth.login_with_mpin(None, None, "1234").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));

    let err = h
        .auth
        .login_with_mpin(None, Some(PHONE), "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));
}
