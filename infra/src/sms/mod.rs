//! SMS delivery implementations for the core `SmsSender` seam

mod log_sender;

pub use log_sender::LogSmsSender;
