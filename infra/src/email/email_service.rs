//! Email Service Interface

use async_trait::async_trait;
use cs_core::services::delivery::EmailMessage;

use crate::InfrastructureError;

/// Email service trait for sending rendered messages
///
/// Implementations include:
/// - AWS SES
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send one email, returning the provider's message id
    async fn send(&self, message: &EmailMessage) -> Result<String, InfrastructureError>;

    /// Get the service provider name (e.g., "AWS SES", "Mock")
    fn provider_name(&self) -> &str;
}
