//! Configuration for the delivery worker

use super::template::{CHARSET, SENDER, SUBJECT};

/// Configuration for the delivery worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryWorkerConfig {
    /// From address for every email
    pub sender: String,
    /// Subject line for every email
    pub subject: String,
    /// Character set for subject and body
    pub charset: String,
    /// Batch items in flight at once (1 = sequential)
    pub max_concurrency: usize,
}

impl Default for DeliveryWorkerConfig {
    fn default() -> Self {
        Self {
            sender: SENDER.to_string(),
            subject: SUBJECT.to_string(),
            charset: CHARSET.to_string(),
            max_concurrency: 1,
        }
    }
}

impl DeliveryWorkerConfig {
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}
