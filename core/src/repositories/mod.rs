//! Repository traits abstracting the credential store
//!
//! Concrete implementations live in the infra crate; in-memory mocks are
//! provided here for service tests.

pub mod otp;
pub mod user;

pub use otp::{MockOtpRepository, OtpRepository};
pub use user::{MockUserRepository, UserRepository};
