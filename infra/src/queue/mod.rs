//! Queue module
//!
//! SQS-backed publisher used by the issuer and the consumer used by the
//! worker poller. Delivery is at-least-once: a received message stays on the
//! queue until it is explicitly deleted.

pub mod consumer;
pub mod sqs;
pub mod trait_adapter;

#[cfg(test)]
mod tests;

pub use consumer::QueueConsumer;
pub use sqs::SqsQueueService;
