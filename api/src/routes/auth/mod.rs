//! Authentication route handlers
//!
//! - Email verification code issuance

pub mod send_code;

pub use send_code::AppState;
