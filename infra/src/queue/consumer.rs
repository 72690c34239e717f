//! Queue consumer interface

use async_trait::async_trait;
use cs_core::domain::entities::QueueMessage;

use crate::InfrastructureError;

/// Receiving side of the delivery queue
#[async_trait]
pub trait QueueConsumer: Send + Sync {
    /// Receive up to `max_messages` messages, waiting at most `wait_time_seconds`
    ///
    /// An empty vector means the wait elapsed with nothing to deliver.
    async fn receive_messages(
        &self,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<QueueMessage>, InfrastructureError>;

    /// Acknowledge a message so it is not redelivered
    async fn delete_message(&self, receipt_handle: &str) -> Result<(), InfrastructureError>;
}
