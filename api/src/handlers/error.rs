//! Error to HTTP response mapping

use actix_web::HttpResponse;
use cs_core::errors::DomainError;
use cs_shared::{error_codes, ErrorResponse};

/// Body returned when the request cannot be parsed
pub const MARSHAL_ERROR: &str = "Error occurred marshalling request body";

/// Body returned when the delivery request cannot be queued
pub const QUEUE_ERROR: &str = "Error occurred queueing email";

/// Map an issuance failure to its response
///
/// Both failure kinds are reported as server errors with a fixed plain-text
/// body; the underlying cause is only logged.
pub fn issuance_error_response(error: &DomainError) -> HttpResponse {
    let body = match error {
        DomainError::Serialization { .. } => MARSHAL_ERROR,
        _ => QUEUE_ERROR,
    };

    HttpResponse::InternalServerError()
        .content_type("text/plain")
        .body(body)
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
