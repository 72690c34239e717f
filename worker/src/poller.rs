//! Queue poller driving the delivery worker

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cs_core::domain::entities::BatchReport;
use cs_core::services::delivery::{DeliveryWorker, EmailServiceTrait};
use cs_infra::queue::QueueConsumer;
use cs_infra::InfrastructureError;
use cs_shared::config::WorkerConfig;
use tracing::{debug, error, info, warn};

/// Pause after a failed receive before polling again
const RECEIVE_ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Pause between empty receives when long polling is disabled
const IDLE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Long-polls the queue and hands each batch to the delivery worker
pub struct QueuePoller<Q: QueueConsumer, E: EmailServiceTrait> {
    consumer: Arc<Q>,
    worker: DeliveryWorker<E>,
    config: WorkerConfig,
}

impl<Q: QueueConsumer, E: EmailServiceTrait> QueuePoller<Q, E> {
    pub fn new(consumer: Arc<Q>, worker: DeliveryWorker<E>, config: WorkerConfig) -> Self {
        Self {
            consumer,
            worker,
            config,
        }
    }

    /// Receive one batch, deliver it and acknowledge the sent messages
    ///
    /// Failed messages are not deleted, so the queue redelivers them once
    /// their visibility timeout expires. An acknowledgement failure is
    /// logged and only leads to a duplicate delivery later.
    pub async fn poll_once(&self) -> Result<BatchReport, InfrastructureError> {
        let messages = self
            .consumer
            .receive_messages(self.config.max_messages, self.config.wait_time_seconds)
            .await?;

        if messages.is_empty() {
            debug!("No messages received");
            return Ok(BatchReport::default());
        }

        let report = self.worker.process_batch(&messages).await;

        // Outcomes are in batch order
        for (message, outcome) in messages.iter().zip(&report.outcomes) {
            if !outcome.is_sent() {
                continue;
            }
            let Some(receipt_handle) = message.receipt_handle.as_deref() else {
                warn!(message_id = %message.message_id, "Message has no receipt handle, cannot acknowledge");
                continue;
            };
            if let Err(e) = self.consumer.delete_message(receipt_handle).await {
                warn!(message_id = %message.message_id, error = %e, "Unable to acknowledge message");
            }
        }

        if !report.is_complete_success() {
            match serde_json::to_string(&report.to_response()) {
                Ok(response) => info!(batch_item_failures = %response, "Batch had failures"),
                Err(e) => error!(error = %e, "Unable to serialize batch response"),
            }
        }

        Ok(report)
    }

    /// Poll until `shutdown` resolves
    ///
    /// Shutdown cancels the current poll; messages not yet acknowledged are
    /// redelivered by the queue.
    pub async fn run<S>(&self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(
            max_messages = self.config.max_messages,
            wait_time_seconds = self.config.wait_time_seconds,
            "Queue poller started"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                result = self.poll_once() => {
                    let pause = match result {
                        Ok(report) if report.outcomes.is_empty() => self.idle_pause(),
                        Ok(_) => None,
                        Err(e) => {
                            error!(error = %e, "Unable to receive messages");
                            Some(RECEIVE_ERROR_BACKOFF)
                        }
                    };
                    if let Some(pause) = pause {
                        tokio::select! {
                            _ = &mut shutdown => break,
                            _ = tokio::time::sleep(pause) => {}
                        }
                    }
                }
            }
        }

        info!("Queue poller stopped");
    }

    /// Delay before the next receive after an empty batch
    ///
    /// A long poll already waits server-side, so only short polling pauses.
    fn idle_pause(&self) -> Option<Duration> {
        (self.config.wait_time_seconds == 0).then_some(IDLE_POLL_INTERVAL)
    }
}
