//! Verification code entity and the inbound issuance request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Number of distinct codes (`000000` through `999999`)
pub const CODE_SPACE: u32 = 1_000_000;

/// Inbound issuance request body: `{"email": "..."}`
///
/// A missing `email` field deserializes to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub email: String,
}

impl VerificationRequest {
    /// Parse a request body, mapping malformed JSON to a serialization error
    pub fn from_json(body: &str) -> DomainResult<Self> {
        serde_json::from_str(body).map_err(|e| DomainError::Serialization {
            message: e.to_string(),
        })
    }
}

/// A code as held by the cache store, keyed by email
///
/// Codes are written once per issuance and overwritten when the same email
/// is issued again. `expiry` of `None` stores the code without expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// Email address the code was issued for (cache key)
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Time-to-live in the cache store
    pub expiry: Option<Duration>,
}

impl VerificationCode {
    pub fn new(email: impl Into<String>, code: impl Into<String>, expiry: Option<Duration>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            expiry,
        }
    }

    /// Check that a code is exactly six ASCII digits
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
    }

    /// Whether this entity carries a well-formed code
    pub fn has_valid_code(&self) -> bool {
        Self::is_well_formed(&self.code)
    }
}
