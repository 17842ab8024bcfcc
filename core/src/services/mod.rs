//! Business services: OTP engine, token issuer, auth state machine and
//! profile manager

pub mod auth;
pub mod otp;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use otp::{OtpService, SmsSender};
pub use token::TokenService;
pub use user::UserService;
