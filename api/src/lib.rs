//! # Code Sender API
//!
//! HTTP gateway for verification code issuance. A request names an email;
//! the gateway issues a code, caches it and queues a delivery request,
//! then answers as soon as the queue has accepted it.

pub mod app;
pub mod handlers;
pub mod routes;

pub use app::create_app;
pub use routes::auth::AppState;
