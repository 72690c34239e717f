//! Types for issuance results

/// Result of a successful issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueResult {
    /// Email the code was issued for
    pub email: String,
    /// Code carried by the published delivery request (empty if caching failed)
    pub code: String,
    /// Queue message id of the delivery request
    pub message_id: String,
    /// Whether the cache store accepted the code
    pub cached: bool,
}
