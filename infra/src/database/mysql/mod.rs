//! Repository implementations against MySQL

use og_core::errors::DomainError;

mod otp_repository;
mod user_repository;

pub use otp_repository::MySqlOtpRepository;
pub use user_repository::MySqlUserRepository;

/// Wrap a low-level database failure with its operation context
pub(crate) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}
