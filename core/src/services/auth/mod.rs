//! Auth state machine orchestrating signup, OTP verification, MPIN
//! setup/login and session token issuance

mod config;
mod service;

pub use config::AuthServiceConfig;
pub use service::AuthService;

#[cfg(test)]
mod tests;
