//! Code issuance module
//!
//! This module provides the synchronous, user-facing half of the handoff:
//! - Code generation from a process-owned random generator
//! - Best-effort storage of the code in the cache store
//! - Publication of a delivery request to the queue

mod config;
mod generator;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::CodeIssuerConfig;
pub use generator::{format_code, CodeGenerator, RandomCodeGenerator};
pub use service::CodeIssuer;
pub use traits::{CacheServiceTrait, QueueServiceTrait};
pub use types::IssueResult;
