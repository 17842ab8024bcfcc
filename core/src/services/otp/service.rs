//! OTP engine implementation

use std::sync::Arc;

use og_shared::config::OtpConfig;
use og_shared::utils::phone::mask_phone;
use tracing::{info, warn};

use crate::domain::entities::otp::OtpCode;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::OtpRepository;

use super::traits::SmsSender;

/// Service managing the one-time password lifecycle
///
/// Codes are persisted append-only with a configured TTL and consumed
/// exactly once on successful verification. Expiry is checked lazily at
/// verification time; nothing sweeps old rows.
pub struct OtpService<O: OtpRepository, S: SmsSender> {
    otp_repository: Arc<O>,
    sms_sender: Arc<S>,
    config: OtpConfig,
}

impl<O: OtpRepository, S: SmsSender> OtpService<O, S> {
    /// Create a new OTP service
    pub fn new(otp_repository: Arc<O>, sms_sender: Arc<S>, config: OtpConfig) -> Self {
        Self {
            otp_repository,
            sms_sender,
            config,
        }
    }

    /// Generate a fresh code, persist it against the phone number with
    /// `expires_at = now + ttl`, and trigger delivery.
    ///
    /// Delivery failures are logged and swallowed: the code is already
    /// stored and the caller can re-request if the message never lands.
    pub async fn issue(&self, phone: &str) -> DomainResult<OtpCode> {
        let otp = OtpCode::new(phone.to_string(), self.config.expiry_minutes);
        let otp = self.otp_repository.save(otp).await?;

        if let Err(e) = self.sms_sender.send_code(phone, &otp.code).await {
            warn!(
                phone = %mask_phone(phone),
                error = %e,
                "OTP delivery failed"
            );
        }

        info!(
            phone = %mask_phone(phone),
            expires_at = %otp.expires_at,
            "Issued OTP"
        );

        Ok(otp)
    }

    /// Verify a code for a phone number and consume it.
    ///
    /// Fails with `InvalidOtp` when no unconsumed, unexpired record
    /// matches, or when another request consumed the record first. A
    /// successful verification makes every later attempt with the same
    /// code fail.
    pub async fn verify(&self, phone: &str, code: &str) -> DomainResult<()> {
        let record = self
            .otp_repository
            .find_active(phone, code)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        // The conditional consume closes the check-then-act window.
        if !self.otp_repository.consume(record.id).await? {
            return Err(AuthError::InvalidOtp.into());
        }

        info!(phone = %mask_phone(phone), "OTP verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockOtpRepository;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    struct NullSms;

    #[async_trait]
    impl SmsSender for NullSms {
        async fn send_code(&self, _phone: &str, _code: &str) -> Result<(), String> {
            Ok(())
        }
    }

    fn service(repo: Arc<MockOtpRepository>) -> OtpService<MockOtpRepository, NullSms> {
        OtpService::new(repo, Arc::new(NullSms), OtpConfig { expiry_minutes: 10 })
    }

    #[tokio::test]
    async fn test_issue_then_verify() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo.clone());

        let issued = otp.issue("+15551234567").await.unwrap();
        assert!(otp.verify("+15551234567", &issued.code).await.is_ok());
    }

    #[tokio::test]
    async fn test_second_verify_fails() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo.clone());

        let issued = otp.issue("+15551234567").await.unwrap();
        otp.verify("+15551234567", &issued.code).await.unwrap();

        let err = otp.verify("+15551234567", &issued.code).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Auth(AuthError::InvalidOtp)
        ));
    }

    #[tokio::test]
    async fn test_wrong_code_fails() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo.clone());

        let issued = otp.issue("+15551234567").await.unwrap();
        let wrong = if issued.code == "000000" { "000001" } else { "000000" };
        assert!(otp.verify("+15551234567", wrong).await.is_err());

        // The stored code survives a failed attempt
        assert!(otp.verify("+15551234567", &issued.code).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_code_fails_even_when_matching() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo.clone());

        let mut issued = OtpCode::new("+15551234567".to_string(), 10);
        issued.expires_at = Utc::now() - Duration::seconds(1);
        let code = issued.code.clone();
        repo.save(issued).await.unwrap();

        assert!(otp.verify("+15551234567", &code).await.is_err());
    }

    #[tokio::test]
    async fn test_newest_code_wins() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo.clone());

        let first = otp.issue("+15551234567").await.unwrap();
        let second = otp.issue("+15551234567").await.unwrap();

        // Both rows exist; each code verifies against its own row and the
        // newer one is preferred on ties.
        assert!(otp.verify("+15551234567", &second.code).await.is_ok());
        if first.code != second.code {
            assert!(otp.verify("+15551234567", &first.code).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_verify_unknown_phone_fails() {
        let repo = Arc::new(MockOtpRepository::new());
        let otp = service(repo);

        assert!(otp.verify("+15550000000", "123456").await.is_err());
    }
}
