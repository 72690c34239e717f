//! Delivery worker polling configuration

use crate::errors::ConfigError;
use super::parsed;

/// Largest batch the queue hands out per receive call
pub const MAX_BATCH_SIZE: i32 = 10;

/// Longest long-poll wait the queue supports, in seconds
pub const MAX_WAIT_SECONDS: i32 = 20;

/// Queue polling configuration for the delivery worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Messages requested per receive call (1-10)
    pub max_messages: i32,

    /// Long-poll wait per receive call in seconds (0-20)
    pub wait_time_seconds: i32,

    /// Batch items processed concurrently (1 = sequential)
    pub max_concurrency: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_messages: MAX_BATCH_SIZE,
            wait_time_seconds: MAX_WAIT_SECONDS,
            max_concurrency: 1,
        }
    }
}

impl WorkerConfig {
    /// Create from an arbitrary key lookup, clamping values to queue limits
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            max_messages: parsed::<_, i32>(lookup, "WORKER_MAX_MESSAGES")?
                .unwrap_or(defaults.max_messages)
                .clamp(1, MAX_BATCH_SIZE),
            wait_time_seconds: parsed::<_, i32>(lookup, "WORKER_WAIT_SECONDS")?
                .unwrap_or(defaults.wait_time_seconds)
                .clamp(0, MAX_WAIT_SECONDS),
            max_concurrency: parsed::<_, usize>(lookup, "WORKER_MAX_CONCURRENCY")?
                .unwrap_or(defaults.max_concurrency)
                .max(1),
        })
    }
}
