//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while assembling configuration at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unable to get {name}")]
    MissingVariable { name: String },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Standard error response structure used for JSON error bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
    pub const CACHE_ERROR: &str = "CACHE_ERROR";
    pub const QUEUE_ERROR: &str = "QUEUE_ERROR";
    pub const EMAIL_ERROR: &str = "EMAIL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::missing("QUEUE_URL").to_string(),
            "unable to get QUEUE_URL"
        );
        assert_eq!(
            ConfigError::invalid("SERVER_PORT", "abc").to_string(),
            "invalid value for SERVER_PORT: abc"
        );
    }

    #[test]
    fn test_error_response_details() {
        let response = ErrorResponse::new(error_codes::NOT_FOUND, "missing")
            .add_detail("path", "/nope");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["details"]["path"], "/nope");
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let response = ErrorResponse::new(error_codes::INTERNAL_ERROR, "boom");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
