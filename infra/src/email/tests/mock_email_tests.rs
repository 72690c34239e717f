//! Unit tests for the mock email service and the core adapter

use cs_core::services::delivery::{
    render_html_body, EmailMessage, EmailServiceTrait, CHARSET, SENDER, SUBJECT,
};

use crate::email::{EmailService, EmailServiceAdapter, MockEmailService};
use crate::InfrastructureError;

fn message_to(to: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        from: SENDER.to_string(),
        subject: SUBJECT.to_string(),
        html_body: render_html_body("123456"),
        charset: CHARSET.to_string(),
    }
}

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::new();

    let message_id = service.send(&message_to("a@example.com")).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.sent_messages()[0].to, "a@example.com");
}

#[tokio::test]
async fn test_mock_email_simulated_failure() {
    let service = MockEmailService::failing();

    let result = service.send(&message_to("a@example.com")).await;

    assert!(matches!(result, Err(InfrastructureError::Email(_))));
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_email_failing_recipient_only() {
    let service = MockEmailService::new().with_failing_recipient("bad@example.com");

    assert!(service.send(&message_to("bad@example.com")).await.is_err());
    assert!(service.send(&message_to("good@example.com")).await.is_ok());
    assert_eq!(service.get_message_count(), 1);
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let mock = MockEmailService::new().with_failing_recipient("bad@example.com");
    let adapter = EmailServiceAdapter::new(Box::new(mock.clone()));

    assert_eq!(adapter.provider_name(), "Mock");
    assert!(adapter.send_email(&message_to("ok@example.com")).await.is_ok());

    let err = adapter.send_email(&message_to("bad@example.com")).await.unwrap_err();
    assert!(err.contains("Simulated email sending failure"));

    // Clones share state
    assert_eq!(mock.get_message_count(), 1);
}
