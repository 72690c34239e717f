//! SQS Queue Service Trait Adapter
//!
//! Bridges the infrastructure SQS service to the core queue trait used by
//! the issuer.

use async_trait::async_trait;
use cs_core::services::issuer::QueueServiceTrait;

use crate::queue::SqsQueueService;

#[async_trait]
impl QueueServiceTrait for SqsQueueService {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, String> {
        self.send(queue_url, body).await.map_err(|e| e.to_string())
    }
}
