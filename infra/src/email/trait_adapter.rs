//! Email Service Trait Adapter
//!
//! Implements the core `EmailServiceTrait` for any infrastructure email
//! service, bridging the transport implementations with the delivery worker.

use async_trait::async_trait;
use cs_core::services::delivery::{EmailMessage, EmailServiceTrait};

use crate::email::EmailService;

/// Adapter that implements the core EmailServiceTrait for a boxed transport
pub struct EmailServiceAdapter {
    inner: Box<dyn EmailService>,
}

impl EmailServiceAdapter {
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl EmailServiceTrait for EmailServiceAdapter {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, String> {
        self.inner.send(message).await.map_err(|e| e.to_string())
    }
}
