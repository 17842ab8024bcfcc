//! Token issuer: stateless JWT session tokens

mod config;
mod service;

pub use config::TokenConfig;
pub use service::TokenService;
