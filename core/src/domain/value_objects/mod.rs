//! Value objects returned by the core services

pub mod auth;
pub mod profile;

pub use auth::{AuthSession, LoginStarted, SignupVerified, UserSummary};
pub use profile::{CompleteProfile, ProfileUpdate, UserProfile};
