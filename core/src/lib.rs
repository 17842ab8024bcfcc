//! # OtpGate Core
//!
//! Core business logic and domain layer for the OtpGate backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! authentication flow: signup, OTP verification, MPIN login, token
//! issuance and profile management.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
