//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis cache store for issued codes
//! - `email` - Email transport provider and region
//! - `environment` - Environment detection and logging configuration
//! - `queue` - Delivery request queue
//! - `server` - HTTP server for the issuance gateway
//! - `worker` - Queue polling for the delivery worker
//!
//! Every structure is built once at startup, either from the process
//! environment (`from_env`) or from an explicit lookup (`from_lookup`).

pub mod cache;
pub mod email;
pub mod environment;
pub mod queue;
pub mod server;
pub mod worker;

use std::str::FromStr;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use cache::CacheConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use queue::QueueConfig;
pub use server::ServerConfig;
pub use worker::WorkerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Delivery request queue
    pub queue: QueueConfig,

    /// Cache store; `None` when `REDIS_CACHE` is not set
    pub cache: Option<CacheConfig>,

    /// Email transport configuration
    pub email: EmailConfig,

    /// Queue polling configuration
    pub worker: WorkerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Required values are validated here so that a misconfigured process
    /// fails at startup instead of on its first request.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            queue: QueueConfig::from_lookup(&lookup)?,
            cache: CacheConfig::from_lookup(&lookup)?,
            email: EmailConfig::from_lookup(&lookup)?,
            worker: WorkerConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::from_lookup(&lookup, environment)?,
        })
    }
}

/// Read a non-blank value for `key`
pub(crate) fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse an optional value for `key`
pub(crate) fn parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_blank(lookup, key) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, raw)),
        None => Ok(None),
    }
}
