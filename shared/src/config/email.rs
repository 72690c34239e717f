//! Email transport configuration module
//!
//! Sender address, subject line, and character set are compiled into the
//! delivery worker and are deliberately absent here.

use std::str::FromStr;

use crate::errors::ConfigError;
use super::{non_blank, queue::default_region};

/// Email transport provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailProvider {
    /// Amazon SES
    Ses,
    /// Logs messages instead of sending them
    Mock,
}

impl FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ses" | "aws-ses" => Ok(EmailProvider::Ses),
            "mock" => Ok(EmailProvider::Mock),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

impl std::fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailProvider::Ses => write!(f, "ses"),
            EmailProvider::Mock => write!(f, "mock"),
        }
    }
}

/// Email transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// Provider used to send emails
    pub provider: EmailProvider,

    /// AWS region for SES
    pub region: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Ses,
            region: default_region(),
        }
    }
}

impl EmailConfig {
    /// Create from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match non_blank(lookup, "EMAIL_PROVIDER") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::invalid("EMAIL_PROVIDER", raw))?,
            None => EmailProvider::Ses,
        };

        Ok(Self {
            provider,
            region: non_blank(lookup, "AWS_REGION").unwrap_or_else(default_region),
        })
    }

    /// Configuration for the mock provider
    pub fn mock() -> Self {
        Self {
            provider: EmailProvider::Mock,
            ..Default::default()
        }
    }
}
