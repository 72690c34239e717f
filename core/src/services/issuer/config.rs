//! Configuration for the code issuer

use std::time::Duration;

use cs_shared::{CacheConfig, QueueConfig};

use crate::errors::{DomainError, DomainResult};

/// Configuration for the code issuer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeIssuerConfig {
    /// Queue that receives delivery requests
    pub queue_url: String,
    /// Expiry for cached codes; `None` stores codes without expiry
    pub code_ttl: Option<Duration>,
}

impl CodeIssuerConfig {
    pub fn new(queue_url: impl Into<String>) -> Self {
        Self {
            queue_url: queue_url.into(),
            code_ttl: None,
        }
    }

    /// Build from the startup configuration
    pub fn from_app_config(queue: &QueueConfig, cache: Option<&CacheConfig>) -> Self {
        Self {
            queue_url: queue.queue_url.clone(),
            code_ttl: cache.and_then(|c| c.code_ttl),
        }
    }

    pub fn with_code_ttl(mut self, ttl: Duration) -> Self {
        self.code_ttl = Some(ttl);
        self
    }

    /// Reject configurations that could never publish
    pub fn validate(&self) -> DomainResult<()> {
        if self.queue_url.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "unable to get QUEUE_URL".to_string(),
            });
        }
        Ok(())
    }
}
