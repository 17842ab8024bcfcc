//! Logging stand-in for a real SMS gateway

use async_trait::async_trait;
use tracing::info;

use og_core::services::SmsSender;
use og_shared::utils::phone::mask_phone;

/// SMS sender that writes the code to the log instead of sending it.
///
/// Intended for local development and test environments where no
/// provider is configured; the code has to be readable somewhere, so it
/// is logged in the clear. Production deployments replace this with a
/// gateway-backed implementation of the same trait.
#[derive(Debug, Clone, Default)]
pub struct LogSmsSender;

impl LogSmsSender {
    /// Create a new logging sender
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), String> {
        info!(
            phone = %mask_phone(phone),
            code = %code,
            "SMS delivery (log sender): your OtpGate verification code"
        );
        Ok(())
    }
}
