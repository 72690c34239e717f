//! Domain layer containing the data contracts exchanged between stages.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{
    BatchItemFailure, BatchReport, BatchResponse, DeliveryOutcome, DeliveryRequest,
    MessageOutcome, QueueMessage, VerificationCode, VerificationRequest,
};
