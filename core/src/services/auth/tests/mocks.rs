//! Test doubles and wiring helpers for the auth service tests

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use og_shared::config::OtpConfig;

use crate::repositories::{MockOtpRepository, MockUserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::otp::{OtpService, SmsSender};
use crate::services::token::{TokenConfig, TokenService};

/// SMS sender that records every delivery instead of sending anything
#[derive(Default)]
pub struct RecordingSms {
    sent: RwLock<Vec<(String, String)>>,
}

impl RecordingSms {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }

    pub async fn last_code(&self) -> Option<String> {
        self.sent.read().await.last().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl SmsSender for RecordingSms {
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), String> {
        self.sent
            .write()
            .await
            .push((phone.to_string(), code.to_string()));
        Ok(())
    }
}

/// Fully wired auth service over in-memory repositories
pub struct TestHarness {
    pub users: Arc<MockUserRepository>,
    pub otps: Arc<MockOtpRepository>,
    pub sms: Arc<RecordingSms>,
    pub tokens: Arc<TokenService>,
    pub auth: AuthService<MockUserRepository, MockOtpRepository, RecordingSms>,
}

impl TestHarness {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let otps = Arc::new(MockOtpRepository::new());
        let sms = Arc::new(RecordingSms::new());
        let tokens = Arc::new(TokenService::new(TokenConfig {
            secret: "unit-test-secret".to_string(),
            expiry_hours: 1,
            issuer: "otpgate-test".to_string(),
        }));

        let otp_service = Arc::new(OtpService::new(
            otps.clone(),
            sms.clone(),
            OtpConfig { expiry_minutes: 10 },
        ));

        let auth = AuthService::new(
            users.clone(),
            otp_service,
            tokens.clone(),
            // Minimum bcrypt cost keeps the hashing tests fast.
            AuthServiceConfig {
                mpin_bcrypt_cost: 4,
            },
        );

        Self {
            users,
            otps,
            sms,
            tokens,
            auth,
        }
    }
}
