//! Shared response handlers

pub mod error;
