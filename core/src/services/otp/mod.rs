//! OTP engine: code generation, issuance and one-shot verification

mod service;
mod traits;

pub use service::OtpService;
pub use traits::SmsSender;
