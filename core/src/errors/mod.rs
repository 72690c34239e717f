//! Domain error taxonomy for issuance and delivery.
//!
//! Issuance treats `Configuration`, `Serialization` and `Queue` as fatal to
//! the call; `Cache` is logged and swallowed. Delivery records
//! `EmailTransport` per batch item and never aborts the batch.

use cs_shared::error_codes;
use thiserror::Error;


/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Queue error: {message}")]
    Queue { message: String },

    #[error("Email transport error: {message}")]
    EmailTransport { message: String },
}

impl DomainError {
    /// Stable error code for logs and JSON error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Configuration { .. } => error_codes::CONFIGURATION_ERROR,
            DomainError::Serialization { .. } => error_codes::SERIALIZATION_ERROR,
            DomainError::Cache { .. } => error_codes::CACHE_ERROR,
            DomainError::Queue { .. } => error_codes::QUEUE_ERROR,
            DomainError::EmailTransport { .. } => error_codes::EMAIL_ERROR,
        }
    }
}

impl From<cs_shared::ConfigError> for DomainError {
    fn from(err: cs_shared::ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
