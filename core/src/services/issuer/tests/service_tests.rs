//! Unit tests for the code issuer

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::delivery::DeliveryRequest;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;
use crate::services::issuer::{CodeIssuer, CodeIssuerConfig};

use super::mocks::{MockCacheService, MockQueueService, SequenceCodeGenerator};

const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/mailer-queue";

fn issuer_with(
    cache: Arc<MockCacheService>,
    queue: Arc<MockQueueService>,
    codes: &[&str],
) -> CodeIssuer<MockCacheService, MockQueueService> {
    CodeIssuer::with_generator(
        cache,
        queue,
        Box::new(SequenceCodeGenerator::new(codes)),
        CodeIssuerConfig::new(QUEUE_URL),
    )
    .unwrap()
}

#[tokio::test]
async fn test_issue_and_queue_success() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = CodeIssuer::new(cache.clone(), queue.clone(), CodeIssuerConfig::new(QUEUE_URL)).unwrap();

    let result = issuer.issue_and_queue("a@example.com").await.unwrap();

    assert!(result.cached);
    assert!(VerificationCode::is_well_formed(&result.code));
    assert_eq!(result.message_id, "mock-msg-1");
    assert_eq!(cache.stored_code("a@example.com"), Some(result.code.clone()));

    let sent = queue.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, QUEUE_URL);

    let published = DeliveryRequest::from_json(&sent[0].1).unwrap();
    assert_eq!(published, DeliveryRequest::new("a@example.com", result.code));
}

#[tokio::test]
async fn test_published_body_is_compact_json() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache, queue.clone(), &["042317"]);

    issuer.issue_and_queue("a@example.com").await.unwrap();

    assert_eq!(
        queue.sent_bodies(),
        vec![r#"{"email":"a@example.com","code":"042317"}"#.to_string()]
    );
}

#[tokio::test]
async fn test_codes_stored_without_expiry_by_default() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue, &["123456"]);

    issuer.issue_and_queue("a@example.com").await.unwrap();

    // No expiry is the current behavior; codes stay valid until overwritten
    assert_eq!(cache.stored_expiry("a@example.com"), Some(None));
}

#[tokio::test]
async fn test_configured_expiry_is_passed_to_cache() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let config = CodeIssuerConfig::new(QUEUE_URL).with_code_ttl(Duration::from_secs(300));
    let issuer = CodeIssuer::with_generator(
        cache.clone(),
        queue,
        Box::new(SequenceCodeGenerator::new(&["123456"])),
        config,
    )
    .unwrap();

    issuer.issue_and_queue("a@example.com").await.unwrap();

    assert_eq!(
        cache.stored_expiry("a@example.com"),
        Some(Some(Duration::from_secs(300)))
    );
}

#[tokio::test]
async fn test_cache_failure_still_queues_with_empty_code() {
    // A failed cache write does not abort issuance. The delivery request
    // goes out with an empty code rather than a code that could never be
    // verified.
    let cache = Arc::new(MockCacheService::new(true));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue.clone(), &["555555"]);

    let result = issuer.issue_and_queue("a@example.com").await.unwrap();

    assert!(!result.cached);
    assert_eq!(result.code, "");
    assert_eq!(cache.write_count(), 0);
    assert_eq!(
        queue.sent_bodies(),
        vec![r#"{"email":"a@example.com","code":""}"#.to_string()]
    );
}

#[tokio::test]
async fn test_cache_read_back_failure_is_non_fatal() {
    let cache = Arc::new(MockCacheService::failing_reads());
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue.clone(), &["777777"]);

    let result = issuer.issue_and_queue("a@example.com").await.unwrap();

    // The write landed but the read-back failed; treated like a cache failure
    assert_eq!(cache.stored_code("a@example.com"), Some("777777".to_string()));
    assert!(!result.cached);
    assert_eq!(result.code, "");
    assert_eq!(queue.sent_count(), 1);
}

#[tokio::test]
async fn test_queue_failure_fails_issuance() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(true));
    let issuer = issuer_with(cache.clone(), queue, &["123456"]);

    let result = issuer.issue_and_queue("a@example.com").await;

    match result.unwrap_err() {
        DomainError::Queue { message } => {
            assert!(message.contains("unable to send message to queue"));
        }
        other => panic!("Expected queue error, got {:?}", other),
    }

    // The code counts as issued once the cache write succeeds
    assert_eq!(cache.stored_code("a@example.com"), Some("123456".to_string()));
}

#[tokio::test]
async fn test_missing_queue_url_is_configuration_error() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));

    let result = CodeIssuer::new(cache.clone(), queue.clone(), CodeIssuerConfig::new(""));

    match result {
        Err(DomainError::Configuration { message }) => assert!(message.contains("QUEUE_URL")),
        Err(other) => panic!("Expected configuration error, got {:?}", other),
        Ok(_) => panic!("Expected configuration error"),
    }
    assert_eq!(queue.sent_count(), 0);
    assert_eq!(cache.write_count(), 0);
}

#[tokio::test]
async fn test_reissue_overwrites_cached_code() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue.clone(), &["111111", "222222"]);

    issuer.issue_and_queue("a@example.com").await.unwrap();
    issuer.issue_and_queue("a@example.com").await.unwrap();

    assert_eq!(cache.stored_code("a@example.com"), Some("222222".to_string()));
    assert_eq!(cache.codes.lock().unwrap().len(), 1);
    assert_eq!(queue.sent_count(), 2);
}

#[tokio::test]
async fn test_concurrent_issuance_last_writer_wins() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = Arc::new(
        CodeIssuer::new(cache.clone(), queue.clone(), CodeIssuerConfig::new(QUEUE_URL)).unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let issuer = issuer.clone();
            tokio::spawn(async move { issuer.issue_and_queue("a@example.com").await })
        })
        .collect();

    let mut issued = Vec::new();
    for handle in handles {
        issued.push(handle.await.unwrap().unwrap().code);
    }

    let stored = cache.stored_code("a@example.com").unwrap();
    assert!(issued.contains(&stored));
    assert_eq!(queue.sent_count(), 8);
}

#[tokio::test]
async fn test_handle_request_parses_body() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue.clone(), &["042317"]);

    let result = issuer.handle_request(r#"{"email":"a@example.com"}"#).await.unwrap();

    assert_eq!(result.email, "a@example.com");
    assert_eq!(cache.stored_code("a@example.com"), Some("042317".to_string()));
}

#[tokio::test]
async fn test_handle_request_malformed_body() {
    let cache = Arc::new(MockCacheService::new(false));
    let queue = Arc::new(MockQueueService::new(false));
    let issuer = issuer_with(cache.clone(), queue.clone(), &["042317"]);

    let result = issuer.handle_request("{\"email\":").await;

    assert!(matches!(result, Err(DomainError::Serialization { .. })));
    assert_eq!(cache.write_count(), 0);
    assert_eq!(queue.sent_count(), 0);
}
