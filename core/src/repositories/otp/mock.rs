//! In-memory implementation of OtpRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp::OtpCode;
use crate::errors::DomainError;

use super::OtpRepository;

/// Mock OTP repository backed by an append-only `Vec`
#[derive(Clone, Default)]
pub struct MockOtpRepository {
    codes: Arc<RwLock<Vec<OtpCode>>>,
}

impl MockOtpRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest issued code for a phone, regardless of state (test helper)
    pub async fn latest_for(&self, phone: &str) -> Option<OtpCode> {
        let codes = self.codes.read().await;
        codes
            .iter()
            .filter(|c| c.phone == phone)
            .max_by_key(|c| c.created_at)
            .cloned()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn save(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.push(otp.clone());
        Ok(otp)
    }

    async fn find_active(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|c| c.phone == phone && c.code == code && c.is_valid())
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.iter_mut().find(|c| c.id == id) {
            Some(record) if !record.is_consumed() => {
                record.consume();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
