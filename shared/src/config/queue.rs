//! Queue configuration module

use crate::errors::ConfigError;
use super::non_blank;

/// Delivery request queue configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Destination queue URL for delivery requests
    pub queue_url: String,

    /// AWS region hosting the queue
    pub region: String,
}

impl QueueConfig {
    /// Create a new queue configuration
    pub fn new(queue_url: impl Into<String>) -> Self {
        Self {
            queue_url: queue_url.into(),
            region: default_region(),
        }
    }

    /// Create from an arbitrary key lookup; `QUEUE_URL` is required
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let queue_url = non_blank(lookup, "QUEUE_URL")
            .ok_or_else(|| ConfigError::missing("QUEUE_URL"))?;

        Ok(Self {
            queue_url,
            region: non_blank(lookup, "AWS_REGION").unwrap_or_else(default_region),
        })
    }
}

pub(crate) fn default_region() -> String {
    String::from("us-east-1")
}
