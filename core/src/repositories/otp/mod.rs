//! OTP repository trait for one-time code persistence.

pub mod mock;

pub use mock::MockOtpRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::otp::OtpCode;
use crate::errors::DomainError;

/// Repository trait for OTP records
///
/// The table is append-only: re-requesting a code adds a new row and the
/// newest unconsumed, unexpired match is the only one considered active.
/// Expired rows are invalidated lazily at lookup time, never swept.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Persist a freshly issued code
    async fn save(&self, otp: OtpCode) -> Result<OtpCode, DomainError>;

    /// Find the newest unconsumed, unexpired record matching phone and code
    async fn find_active(&self, phone: &str, code: &str)
        -> Result<Option<OtpCode>, DomainError>;

    /// Mark a record consumed
    ///
    /// Returns `true` only when this call performed the consumption;
    /// `false` when the record was already consumed or is gone. This is
    /// the single atomic step that makes verification one-shot.
    async fn consume(&self, id: Uuid) -> Result<bool, DomainError>;
}
