//! Code issuer implementation

use std::sync::Arc;

use cs_shared::email::mask_email;
use tracing::{debug, error, info, warn};

use crate::domain::entities::delivery::DeliveryRequest;
use crate::domain::entities::verification_code::{VerificationCode, VerificationRequest};
use crate::errors::{DomainError, DomainResult};

use super::config::CodeIssuerConfig;
use super::generator::{CodeGenerator, RandomCodeGenerator};
use super::traits::{CacheServiceTrait, QueueServiceTrait};
use super::types::IssueResult;

/// Issues verification codes and hands them to the delivery queue
pub struct CodeIssuer<C: CacheServiceTrait, Q: QueueServiceTrait> {
    /// Cache store for issued codes
    cache_service: Arc<C>,
    /// Queue transport for delivery requests
    queue_service: Arc<Q>,
    /// Code source, seeded once
    generator: Box<dyn CodeGenerator>,
    /// Issuer configuration
    config: CodeIssuerConfig,
}

impl<C: CacheServiceTrait, Q: QueueServiceTrait> CodeIssuer<C, Q> {
    /// Create a new issuer backed by an entropy-seeded generator
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` when the queue URL is missing.
    pub fn new(
        cache_service: Arc<C>,
        queue_service: Arc<Q>,
        config: CodeIssuerConfig,
    ) -> DomainResult<Self> {
        Self::with_generator(
            cache_service,
            queue_service,
            Box::new(RandomCodeGenerator::from_entropy()),
            config,
        )
    }

    /// Create a new issuer with an explicit code generator
    pub fn with_generator(
        cache_service: Arc<C>,
        queue_service: Arc<Q>,
        generator: Box<dyn CodeGenerator>,
        config: CodeIssuerConfig,
    ) -> DomainResult<Self> {
        config.validate()?;

        Ok(Self {
            cache_service,
            queue_service,
            generator,
            config,
        })
    }

    /// Parse an inbound request body and issue a code for it
    pub async fn handle_request(&self, body: &str) -> DomainResult<IssueResult> {
        let request = VerificationRequest::from_json(body).map_err(|e| {
            warn!("Unable to parse issuance request: {}", e);
            e
        })?;

        self.issue_and_queue(&request.email).await
    }

    /// Generate and cache a code, then publish its delivery request
    ///
    /// Cache failures are logged and do not abort the call; the delivery
    /// request is still published, carrying an empty code. The call
    /// succeeds only when the queue accepts the message. A single publish
    /// attempt is made.
    pub async fn issue_and_queue(&self, email: &str) -> DomainResult<IssueResult> {
        let (code, cached) = match self.generate_and_cache(email).await {
            Ok(code) => (code, true),
            Err(e) => {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    "Cache write failed, continuing with delivery"
                );
                (String::new(), false)
            }
        };

        let message_id = self.publish(email, &code).await?;

        info!(
            email = %mask_email(email),
            message_id = %message_id,
            cached,
            "Delivery request queued"
        );

        Ok(IssueResult {
            email: email.to_string(),
            code,
            message_id,
            cached,
        })
    }

    /// Draw a code and write it to the cache store
    async fn generate_and_cache(&self, email: &str) -> DomainResult<String> {
        let entry = VerificationCode::new(email, self.generator.next_code(), self.config.code_ttl);

        if self.config.code_ttl.is_none() {
            debug!(email = %mask_email(email), "Storing code without expiry");
        }

        self.cache_service
            .store_code(&entry.email, &entry.code, entry.expiry)
            .await
            .map_err(|message| DomainError::Cache { message })?;

        let stored = self
            .cache_service
            .get_code(&entry.email)
            .await
            .map_err(|message| DomainError::Cache { message })?;

        debug!(
            email = %mask_email(email),
            matches = stored.as_deref() == Some(entry.code.as_str()),
            "Read back cached code"
        );

        Ok(entry.code)
    }

    /// Publish a single delivery request
    async fn publish(&self, email: &str, code: &str) -> DomainResult<String> {
        let body = DeliveryRequest::new(email, code)
            .to_json()
            .map_err(|e| DomainError::Queue {
                message: format!("unable to marshal delivery request: {}", e),
            })?;

        self.queue_service
            .send_message(&self.config.queue_url, &body)
            .await
            .map_err(|e| {
                error!(email = %mask_email(email), error = %e, "Queue publish failed");
                DomainError::Queue {
                    message: format!("unable to send message to queue: {}", e),
                }
            })
    }

    /// Get the issuer configuration
    pub fn config(&self) -> &CodeIssuerConfig {
        &self.config
    }
}
