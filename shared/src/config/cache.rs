//! Cache configuration module

use std::time::Duration;

use crate::errors::ConfigError;
use super::{non_blank, parsed};

/// Redis cache store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Optional prefix prepended to every cache key
    pub key_prefix: Option<String>,

    /// Expiry applied to issued codes; `None` stores codes without expiry
    pub code_ttl: Option<Duration>,

    /// Maximum number of connection/operation attempts
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (exponential backoff)
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            key_prefix: None,
            code_ttl: None,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    /// Create from an arbitrary key lookup
    ///
    /// Returns `Ok(None)` when `REDIS_CACHE` is absent; issuance treats a
    /// missing cache as a non-fatal condition.
    pub fn from_lookup<F>(lookup: &F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(address) = non_blank(lookup, "REDIS_CACHE") else {
            return Ok(None);
        };

        let code_ttl = parsed::<_, u64>(lookup, "CODE_TTL_SECONDS")?
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs);

        Ok(Some(Self {
            url: normalize_url(&address),
            key_prefix: non_blank(lookup, "CACHE_KEY_PREFIX"),
            code_ttl,
            ..Default::default()
        }))
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: normalize_url(&url.into()),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set an expiry for issued codes
    pub fn with_code_ttl(mut self, ttl: Duration) -> Self {
        self.code_ttl = Some(ttl);
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

/// Accept both bare `host:port` addresses and full `redis://` URLs
fn normalize_url(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("redis://{}", address)
    }
}
