//! AWS SES Email Service Implementation
//!
//! Sends each message with a single `SendEmail` call: one `To` recipient,
//! an HTML body and the configured charset on both subject and body.
//! Credentials come from the default AWS provider chain.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ses::{
    config::Region,
    error::DisplayErrorContext,
    types::{Body, Content, Destination, Message},
    Client as SesClient,
};
use cs_core::services::delivery::EmailMessage;
use cs_shared::utils::email::mask_email;
use tracing::{error, info};

use crate::email::EmailService;
use crate::InfrastructureError;

/// AWS SES email service implementation
pub struct SesEmailService {
    client: SesClient,
}

impl SesEmailService {
    /// Create a new SES service for `region`
    pub async fn new(region: &str) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        info!("AWS SES email service initialized for region: {}", region);

        Self::from_client(SesClient::new(&aws_config))
    }

    /// Wrap an already constructed SES client
    pub fn from_client(client: SesClient) -> Self {
        Self { client }
    }
}

/// Build charset-tagged SES content
fn content(data: &str, charset: &str) -> Result<Content, InfrastructureError> {
    Content::builder()
        .data(data)
        .charset(charset)
        .build()
        .map_err(|e| InfrastructureError::Email(format!("invalid email content: {}", e)))
}

#[async_trait]
impl EmailService for SesEmailService {
    async fn send(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let destination = Destination::builder().to_addresses(&message.to).build();
        let ses_message = Message::builder()
            .subject(content(&message.subject, &message.charset)?)
            .body(
                Body::builder()
                    .html(content(&message.html_body, &message.charset)?)
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .source(&message.from)
            .destination(destination)
            .message(ses_message)
            .send()
            .await
            .map_err(|e| {
                error!(
                    to = %mask_email(&message.to),
                    "SES SendEmail failed: {}",
                    DisplayErrorContext(&e)
                );
                InfrastructureError::Email(DisplayErrorContext(&e).to_string())
            })?;

        Ok(output.message_id().to_string())
    }

    fn provider_name(&self) -> &str {
        "AWS SES"
    }
}
