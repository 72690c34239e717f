//! Server configuration module

use crate::errors::ConfigError;
use super::{non_blank, parsed};

/// HTTP server configuration for the issuance gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: non_blank(lookup, "SERVER_HOST").unwrap_or(defaults.host),
            port: parsed(lookup, "SERVER_PORT")?.unwrap_or(defaults.port),
            workers: parsed(lookup, "SERVER_WORKERS")?.unwrap_or(defaults.workers),
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
