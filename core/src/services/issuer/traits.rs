//! Traits for cache store and queue transport integration

use std::time::Duration;

use async_trait::async_trait;

/// Trait for cache store integration
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Store (overwrite) the code for an email; `None` means no expiry
    async fn store_code(&self, email: &str, code: &str, expiry: Option<Duration>) -> Result<(), String>;
    /// Read the code currently stored for an email
    async fn get_code(&self, email: &str) -> Result<Option<String>, String>;
}

/// Trait for queue transport integration
#[async_trait]
pub trait QueueServiceTrait: Send + Sync {
    /// Publish one message body, returning the transport message id
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, String>;
}
