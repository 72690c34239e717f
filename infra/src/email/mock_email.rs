//! Mock Email Service Implementation
//!
//! Logs messages instead of sending them. Used for local development and
//! as a controllable transport in tests.

use async_trait::async_trait;
use cs_core::services::delivery::EmailMessage;
use cs_shared::utils::email::mask_email;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use crate::email::EmailService;
use crate::InfrastructureError;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages accepted so far
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    /// Fail every send
    simulate_failure: bool,
    /// Recipients whose sends fail
    failing_recipients: HashSet<String>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that rejects every message
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Reject messages addressed to `recipient`
    pub fn with_failing_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.failing_recipients.insert(recipient.into());
        self
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages accepted so far, in send order
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to);

        if self.simulate_failure || self.failing_recipients.contains(&message.to) {
            warn!(to = %masked, "Mock email service simulating failure");
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            subject = %message.subject,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
