//! Queue message contracts between the code issuer and the delivery worker.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Delivery request published once per issuance: `{"email":"...","code":"..."}`
///
/// Immutable once published. Absent fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

impl DeliveryRequest {
    pub fn new(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
        }
    }

    /// Serialize as a compact JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a queue message body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// A raw message as received from the queue transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMessage {
    /// Transport-assigned message identifier
    pub message_id: String,

    /// Handle used to acknowledge (delete) the message, when the transport has one
    pub receipt_handle: Option<String>,

    /// Message body as published
    pub body: String,
}

impl QueueMessage {
    pub fn new(message_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            receipt_handle: None,
            body: body.into(),
        }
    }

    pub fn with_receipt_handle(mut self, receipt_handle: impl Into<String>) -> Self {
        self.receipt_handle = Some(receipt_handle.into());
        self
    }
}

/// Per-message delivery result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOutcome {
    Sent,
    Failed,
}

/// Outcome of one message within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOutcome {
    /// Transport message identifier
    pub message_id: String,

    /// Identifier reported on failure (the recipient email)
    pub identifier: String,

    pub outcome: DeliveryOutcome,
}

impl MessageOutcome {
    pub fn sent(message_id: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            identifier: identifier.into(),
            outcome: DeliveryOutcome::Sent,
        }
    }

    pub fn failed(message_id: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            identifier: identifier.into(),
            outcome: DeliveryOutcome::Failed,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.outcome == DeliveryOutcome::Sent
    }
}

/// Batch partial-failure report
///
/// `failed_identifiers` is what the queue infrastructure uses to redeliver
/// only the failed items; `outcomes` keeps the per-message detail in batch
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub failed_identifiers: BTreeSet<String>,
    pub outcomes: Vec<MessageOutcome>,
}

impl BatchReport {
    /// Build a report from per-message outcomes
    pub fn from_outcomes(outcomes: Vec<MessageOutcome>) -> Self {
        let failed_identifiers = outcomes
            .iter()
            .filter(|o| o.outcome == DeliveryOutcome::Failed)
            .map(|o| o.identifier.clone())
            .collect();

        Self {
            failed_identifiers,
            outcomes,
        }
    }

    /// True when no message in the batch failed
    pub fn is_complete_success(&self) -> bool {
        self.failed_identifiers.is_empty()
    }

    /// Number of failed messages (not distinct identifiers)
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_sent()).count()
    }

    /// Number of delivered messages
    pub fn sent_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_sent()).count()
    }

    /// Message ids that were delivered and may be acknowledged
    pub fn sent_message_ids(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_sent())
            .map(|o| o.message_id.as_str())
    }

    /// Wire shape returned to the queue infrastructure
    pub fn to_response(&self) -> BatchResponse {
        BatchResponse {
            batch_item_failures: self
                .failed_identifiers
                .iter()
                .map(|id| BatchItemFailure {
                    item_identifier: id.clone(),
                })
                .collect(),
        }
    }
}

/// `{"batchItemFailures":[{"itemIdentifier":"..."}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub batch_item_failures: Vec<BatchItemFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailure {
    pub item_identifier: String,
}
