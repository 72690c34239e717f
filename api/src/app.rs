//! Application factory
//!
//! Builds the Actix-web application around an issuer so the same wiring is
//! used by the server binary and by the HTTP tests.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cs_core::services::issuer::{CacheServiceTrait, QueueServiceTrait};

use crate::handlers::error::not_found;
use crate::routes::auth::{send_code::send_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C, Q>(
    app_state: web::Data<AppState<C, Q>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CacheServiceTrait + 'static,
    Q: QueueServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth").route("/send-code", web::post().to(send_code::<C, Q>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "code-sender-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
