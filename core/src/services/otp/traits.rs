//! Delivery seam for the OTP engine

use async_trait::async_trait;

/// Trait for SMS delivery integration
///
/// Fire-and-forget contract: a returned error means the provider call
/// failed, but no delivery guarantee is implied either way. The infra
/// crate ships a logging stand-in; real providers would implement this.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a one-time code to a phone number
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), String>;
}
