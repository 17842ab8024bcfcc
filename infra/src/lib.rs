//! # OtpGate Infrastructure
//!
//! Concrete implementations of the core crate's outbound seams:
//! MySQL-backed repositories over SQLx and SMS delivery. The API crate
//! wires these into the services at startup; nothing here contains
//! business rules.

pub mod database;
pub mod sms;

pub use database::{create_pool, MySqlOtpRepository, MySqlUserRepository};
pub use sms::LogSmsSender;
