//! Services implementing the two stages of the issuance/delivery handoff.

pub mod delivery;
pub mod issuer;

// Re-export commonly used types
pub use delivery::{DeliveryWorker, DeliveryWorkerConfig, EmailMessage, EmailServiceTrait};
pub use issuer::{
    CacheServiceTrait, CodeGenerator, CodeIssuer, CodeIssuerConfig, IssueResult,
    QueueServiceTrait, RandomCodeGenerator,
};
