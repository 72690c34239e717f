//! AWS SQS Queue Service Implementation
//!
//! Publishes delivery requests for the issuer and receives/acknowledges them
//! for the worker. Credentials come from the default AWS provider chain.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::{config::Region, error::DisplayErrorContext, types::Message, Client as SqsClient};
use cs_core::domain::entities::QueueMessage;
use cs_shared::config::QueueConfig;
use tracing::{debug, error, info};

use crate::queue::QueueConsumer;
use crate::InfrastructureError;

/// AWS SQS queue service
#[derive(Clone)]
pub struct SqsQueueService {
    client: SqsClient,
    queue_url: String,
}

impl SqsQueueService {
    /// Create a new SQS service for the configured queue and region
    pub async fn new(config: &QueueConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        info!(
            queue_url = %config.queue_url,
            region = %config.region,
            "AWS SQS queue service initialized"
        );

        Self::from_client(SqsClient::new(&aws_config), config.queue_url.clone())
    }

    /// Wrap an already constructed SQS client
    pub fn from_client(client: SqsClient, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }

    /// Queue this service receives from
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    /// Publish one message body to `queue_url`, returning the message id
    pub async fn send(&self, queue_url: &str, body: &str) -> Result<String, InfrastructureError> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                error!(queue_url = %queue_url, "SQS SendMessage failed: {}", DisplayErrorContext(&e));
                InfrastructureError::Queue(DisplayErrorContext(&e).to_string())
            })?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        debug!(message_id = %message_id, "Message published to SQS");
        Ok(message_id)
    }
}

/// Convert an SQS message into the transport-neutral form
pub(crate) fn to_queue_message(message: &Message) -> QueueMessage {
    let queue_message = QueueMessage::new(
        message.message_id().unwrap_or_default(),
        message.body().unwrap_or_default(),
    );

    match message.receipt_handle() {
        Some(handle) => queue_message.with_receipt_handle(handle),
        None => queue_message,
    }
}

#[async_trait]
impl QueueConsumer for SqsQueueService {
    async fn receive_messages(
        &self,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<QueueMessage>, InfrastructureError> {
        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .send()
            .await
            .map_err(|e| InfrastructureError::Queue(DisplayErrorContext(&e).to_string()))?;

        let messages: Vec<QueueMessage> = output.messages().iter().map(to_queue_message).collect();
        debug!(count = messages.len(), "Received messages from SQS");
        Ok(messages)
    }

    async fn delete_message(&self, receipt_handle: &str) -> Result<(), InfrastructureError> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| InfrastructureError::Queue(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
