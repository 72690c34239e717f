//! Email Service Module
//!
//! Email transports for delivering verification codes. The worker reaches
//! them through [`EmailServiceAdapter`], which implements the core email
//! trait on top of any boxed [`EmailService`].
//!
//! ## Providers
//!
//! - **AWS SES**: Production delivery via `SendEmail` (feature `aws-ses`)
//! - **Mock**: Logs instead of sending, for development and tests

use cs_shared::config::{EmailConfig, EmailProvider};

pub mod email_service;
pub mod mock_email;
pub mod trait_adapter;

// AWS SES email service (feature-gated)
#[cfg(feature = "aws-ses")]
pub mod ses;

// Re-export commonly used types
pub use email_service::EmailService;
pub use mock_email::MockEmailService;
pub use trait_adapter::EmailServiceAdapter;

#[cfg(feature = "aws-ses")]
pub use ses::SesEmailService;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Falls back to the mock transport when SES support is compiled out.
pub async fn create_email_service(config: &EmailConfig) -> Box<dyn EmailService> {
    match config.provider {
        EmailProvider::Mock => Box::new(MockEmailService::new()),
        #[cfg(feature = "aws-ses")]
        EmailProvider::Ses => Box::new(SesEmailService::new(&config.region).await),
        #[cfg(not(feature = "aws-ses"))]
        EmailProvider::Ses => {
            tracing::warn!("SES support is not compiled in, using mock email service");
            Box::new(MockEmailService::new())
        }
    }
}
