//! Authentication endpoints
//!
//! Signup and login both run the same two-step shape: start with an
//! identity reference, finish by proving possession of the delivered
//! code. MPIN endpoints add the returning-user shortcut.

pub mod complete_profile;
pub mod login;
pub mod mpin_login;
pub mod set_mpin;
pub mod signup;
pub mod verify_login;
pub mod verify_signup;

pub use complete_profile::complete_profile;
pub use login::login;
pub use mpin_login::mpin_login;
pub use set_mpin::set_mpin;
pub use signup::signup;
pub use verify_login::verify_login;
pub use verify_signup::verify_signup;
