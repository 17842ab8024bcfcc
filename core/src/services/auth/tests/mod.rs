//! Unit tests for the authentication service

mod mocks;
mod service_tests;
