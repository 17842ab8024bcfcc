//! Authenticated profile endpoints

pub mod profile;

pub use profile::{get_profile, update_profile};
