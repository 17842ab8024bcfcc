//! # OtpGate API
//!
//! HTTP surface for the OtpGate backend. Handlers are generic over the
//! core repository and delivery traits so integration tests can run the
//! full application against in-memory implementations.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
