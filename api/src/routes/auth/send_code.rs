use actix_web::{web, HttpResponse};
use std::sync::Arc;

use cs_core::services::issuer::{CacheServiceTrait, CodeIssuer, QueueServiceTrait};
use cs_shared::utils::email::mask_email;

use crate::handlers::error::issuance_error_response;

/// Body returned once the delivery request is on the queue
pub const EMAIL_QUEUED: &str = "Email queued";

/// Application state that holds shared services
pub struct AppState<C, Q>
where
    C: CacheServiceTrait,
    Q: QueueServiceTrait,
{
    pub issuer: Arc<CodeIssuer<C, Q>>,
}

impl<C, Q> AppState<C, Q>
where
    C: CacheServiceTrait,
    Q: QueueServiceTrait,
{
    pub fn new(issuer: CodeIssuer<C, Q>) -> Self {
        Self {
            issuer: Arc::new(issuer),
        }
    }
}

/// Handler for POST /api/v1/auth/send-code
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// - `200 Email queued`: the delivery request was accepted by the queue
/// - `500 Error occurred marshalling request body`: the body is not a valid request
/// - `500 Error occurred queueing email`: the queue rejected the delivery request
///
/// A `200` does not mean the email was delivered, nor that the code was
/// cached.
pub async fn send_code<C, Q>(state: web::Data<AppState<C, Q>>, body: web::Bytes) -> HttpResponse
where
    C: CacheServiceTrait + 'static,
    Q: QueueServiceTrait + 'static,
{
    let body = String::from_utf8_lossy(&body);

    match state.issuer.handle_request(&body).await {
        Ok(result) => {
            tracing::info!(
                email = %mask_email(&result.email),
                message_id = %result.message_id,
                cached = result.cached,
                "Verification email queued"
            );
            HttpResponse::Ok().content_type("text/plain").body(EMAIL_QUEUED)
        }
        Err(error) => {
            tracing::error!(
                error = %error,
                error_code = error.error_code(),
                "Unable to issue verification code"
            );
            issuance_error_response(&error)
        }
    }
}
