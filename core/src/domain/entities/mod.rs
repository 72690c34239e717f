//! Domain entities representing issued codes and queued deliveries.

pub mod delivery;
pub mod verification_code;


// Re-export commonly used types
pub use delivery::{
    BatchItemFailure, BatchReport, BatchResponse, DeliveryOutcome, DeliveryRequest,
    MessageOutcome, QueueMessage,
};
pub use verification_code::{VerificationCode, VerificationRequest, CODE_LENGTH, CODE_SPACE};
