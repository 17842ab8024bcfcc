//! Domain entities

pub mod otp;
pub mod token;
pub mod user;

pub use otp::OtpCode;
pub use token::Claims;
pub use user::User;
