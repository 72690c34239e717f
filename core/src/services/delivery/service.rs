//! Delivery worker implementation

use std::sync::Arc;

use cs_shared::email::mask_email;
use futures_util::stream::{self, StreamExt};
use tracing::{error, info, warn};

use crate::domain::entities::delivery::{BatchReport, DeliveryRequest, MessageOutcome, QueueMessage};

use super::config::DeliveryWorkerConfig;
use super::template::render_html_body;
use super::traits::{EmailMessage, EmailServiceTrait};

/// Sends one email per queued delivery request and reports failures
pub struct DeliveryWorker<E: EmailServiceTrait> {
    /// Email transport
    email_service: Arc<E>,
    /// Worker configuration
    config: DeliveryWorkerConfig,
}

impl<E: EmailServiceTrait> DeliveryWorker<E> {
    pub fn new(email_service: Arc<E>, config: DeliveryWorkerConfig) -> Self {
        Self {
            email_service,
            config,
        }
    }

    /// Process a batch and report which items failed
    ///
    /// Every message is attempted; a failed send never stops the rest of
    /// the batch. Outcomes are reported in batch order regardless of
    /// concurrency. No retries happen here, redelivery is left to the queue.
    pub async fn process_batch(&self, messages: &[QueueMessage]) -> BatchReport {
        let outcomes: Vec<MessageOutcome> = if self.config.max_concurrency <= 1 {
            let mut outcomes = Vec::with_capacity(messages.len());
            for message in messages {
                outcomes.push(self.process_message(message).await);
            }
            outcomes
        } else {
            stream::iter(messages.iter().map(|message| self.process_message(message)))
                .buffered(self.config.max_concurrency)
                .collect()
                .await
        };

        let report = BatchReport::from_outcomes(outcomes);

        info!(
            batch_size = messages.len(),
            sent = report.sent_count(),
            failed = report.failed_count(),
            "Batch processed"
        );

        report
    }

    /// Deliver a single queued message
    async fn process_message(&self, message: &QueueMessage) -> MessageOutcome {
        // Malformed bodies are not reported as failures; the zero-valued
        // request goes to the transport like any other.
        let request = match DeliveryRequest::from_json(&message.body) {
            Ok(request) => request,
            Err(e) => {
                warn!(
                    message_id = %message.message_id,
                    error = %e,
                    "Malformed delivery request, continuing with empty request"
                );
                DeliveryRequest::default()
            }
        };

        info!(
            message_id = %message.message_id,
            email = %mask_email(&request.email),
            "Sending email"
        );

        let email = self.compose(&request);

        match self.email_service.send_email(&email).await {
            Ok(transport_id) => {
                info!(
                    message_id = %message.message_id,
                    transport_id = %transport_id,
                    email = %mask_email(&request.email),
                    "Email sent"
                );
                MessageOutcome::sent(message.message_id.clone(), request.email)
            }
            Err(e) => {
                error!(
                    message_id = %message.message_id,
                    email = %mask_email(&request.email),
                    error = %e,
                    "Email send failed"
                );
                MessageOutcome::failed(message.message_id.clone(), request.email)
            }
        }
    }

    /// Render the email for a delivery request
    pub fn compose(&self, request: &DeliveryRequest) -> EmailMessage {
        EmailMessage {
            to: request.email.clone(),
            from: self.config.sender.clone(),
            subject: self.config.subject.clone(),
            html_body: render_html_body(&request.code),
            charset: self.config.charset.clone(),
        }
    }

    /// Get the worker configuration
    pub fn config(&self) -> &DeliveryWorkerConfig {
        &self.config
    }
}
