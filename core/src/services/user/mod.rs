//! Profile reads and partial updates for authenticated users

mod service;

pub use service::UserService;
