use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use cs_api::{create_app, AppState};
use cs_core::services::issuer::{CodeIssuer, CodeIssuerConfig};
use cs_infra::cache::VerificationCache;
use cs_infra::queue::SqsQueueService;
use cs_shared::{logging, AppConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::init(&config.logging);

    info!(environment = %config.environment, "Starting code sender API");

    let cache = VerificationCache::connect(config.cache.clone()).await;
    let queue = SqsQueueService::new(&config.queue).await;
    let issuer = CodeIssuer::new(
        Arc::new(cache),
        Arc::new(queue),
        CodeIssuerConfig::from_app_config(&config.queue, config.cache.as_ref()),
    )?;

    let app_state = web::Data::new(AppState::new(issuer));
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("unable to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
