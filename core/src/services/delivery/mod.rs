//! Email delivery module
//!
//! The slow, best-effort half of the handoff. A batch of queued delivery
//! requests is rendered into emails and sent one by one; the resulting
//! report names only the failed items so the queue can redeliver them.

mod config;
mod service;
mod template;
mod traits;


pub use config::DeliveryWorkerConfig;
pub use service::DeliveryWorker;
pub use template::{render_html_body, CHARSET, SENDER, SUBJECT};
pub use traits::{EmailMessage, EmailServiceTrait};
