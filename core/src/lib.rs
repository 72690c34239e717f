//! # Code Sender Core
//!
//! Core domain layer for the code-sender services. This crate contains the
//! message contracts shared by both stages of the handoff, the error
//! taxonomy, and the two services that make up the protocol:
//!
//! - [`CodeIssuer`](services::issuer::CodeIssuer) generates a code, stores it
//!   in the cache store and publishes a delivery request to the queue.
//! - [`DeliveryWorker`](services::delivery::DeliveryWorker) consumes a batch of
//!   delivery requests, sends one email per request and reports which items
//!   failed so the queue can redeliver only those.
//!
//! External collaborators (cache, queue, email transport) are reached
//! through the traits in each service module.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    BatchItemFailure, BatchReport, BatchResponse, DeliveryOutcome, DeliveryRequest,
    MessageOutcome, QueueMessage, VerificationCode, VerificationRequest,
};
pub use errors::{DomainError, DomainResult};
pub use services::{
    CacheServiceTrait, CodeGenerator, CodeIssuer, CodeIssuerConfig, DeliveryWorker,
    DeliveryWorkerConfig, EmailMessage, EmailServiceTrait, IssueResult, QueueServiceTrait,
    RandomCodeGenerator,
};
