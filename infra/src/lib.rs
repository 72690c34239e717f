//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core services reach
//! through traits:
//!
//! - **Cache**: Redis client and the verification code cache
//! - **Queue**: SQS publisher and consumer for delivery requests
//! - **Email**: SES transport and a mock transport for development
//!
//! ## Features
//!
//! - `aws-ses`: Enable the SES email transport (default)

// Re-export core types for convenience
pub use cs_core::errors::*;

/// Cache module - Redis client and verification code storage
pub mod cache;

/// Queue module - SQS publish, receive and acknowledge
pub mod queue;

/// Email module - email transports
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Queue transport error
    #[error("Queue error: {0}")]
    Queue(String),

    /// Email transport error
    #[error("Email service error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payload serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<cs_shared::ConfigError> for InfrastructureError {
    fn from(error: cs_shared::ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        let message = error.to_string();
        match error {
            InfrastructureError::Cache(_) => DomainError::Cache { message },
            InfrastructureError::Queue(_) => DomainError::Queue { message },
            InfrastructureError::Email(_) => DomainError::EmailTransport { message },
            InfrastructureError::Config(_) => DomainError::Configuration { message },
            InfrastructureError::Serialization(_) => DomainError::Serialization { message },
        }
    }
}
