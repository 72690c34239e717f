use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

use cs_core::services::delivery::{DeliveryWorker, DeliveryWorkerConfig};
use cs_infra::email::{create_email_service, EmailServiceAdapter};
use cs_infra::queue::SqsQueueService;
use cs_shared::{logging, AppConfig};
use cs_worker::QueuePoller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::init(&config.logging);

    info!(environment = %config.environment, "Starting code sender worker");

    let email_service = EmailServiceAdapter::new(create_email_service(&config.email).await);
    info!(provider = email_service.provider_name(), "Email transport ready");

    let worker = DeliveryWorker::new(
        Arc::new(email_service),
        DeliveryWorkerConfig::default().with_max_concurrency(config.worker.max_concurrency),
    );
    let consumer = Arc::new(SqsQueueService::new(&config.queue).await);
    let poller = QueuePoller::new(consumer, worker, config.worker.clone());

    poller
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Unable to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
