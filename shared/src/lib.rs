//! Shared utilities and common types for the code-sender services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (queue, cache, email, worker, server, logging)
//! - Error types and response structures
//! - Logging initialization
//! - Utility functions (email masking)

pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    CacheConfig, EmailConfig, EmailProvider, QueueConfig, WorkerConfig,
    ServerConfig, LoggingConfig, LogFormat,
};
pub use errors::{ConfigError, ErrorResponse, error_codes};
pub use utils::email;
