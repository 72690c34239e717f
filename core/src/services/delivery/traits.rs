//! Trait for email transport integration

use async_trait::async_trait;

/// A rendered email ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html_body: String,
    pub charset: String,
}

/// Trait for email transport integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send one email, returning the transport message id
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String>;
}
