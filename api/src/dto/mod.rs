//! Request and response payloads for the HTTP surface

pub mod auth;
pub mod user;
