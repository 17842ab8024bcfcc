//! Shared utilities and configuration for the OtpGate server
//!
//! This crate provides common functionality used across all server crates:
//! - Environment-driven configuration types
//! - Phone number helpers (validation, masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, JwtConfig, OtpConfig, ServerConfig};
pub use utils::phone;
