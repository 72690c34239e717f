//! HTTP tests for the send-code endpoint, health check and fallback route

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cs_api::{create_app, AppState};
use cs_core::services::issuer::{
    CacheServiceTrait, CodeGenerator, CodeIssuer, CodeIssuerConfig, QueueServiceTrait,
};

const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/mailer-queue";

#[derive(Default)]
struct MockCache {
    should_fail: bool,
}

#[async_trait]
impl CacheServiceTrait for MockCache {
    async fn store_code(&self, _email: &str, _code: &str, _expiry: Option<Duration>) -> Result<(), String> {
        if self.should_fail {
            return Err("connection refused".to_string());
        }
        Ok(())
    }

    async fn get_code(&self, _email: &str) -> Result<Option<String>, String> {
        Ok(Some("654321".to_string()))
    }
}

#[derive(Default)]
struct MockQueue {
    should_fail: bool,
    bodies: Mutex<Vec<String>>,
}

#[async_trait]
impl QueueServiceTrait for MockQueue {
    async fn send_message(&self, _queue_url: &str, body: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("AccessDenied".to_string());
        }
        self.bodies.lock().unwrap().push(body.to_string());
        Ok("msg-1".to_string())
    }
}

struct FixedCode;

impl CodeGenerator for FixedCode {
    fn next_code(&self) -> String {
        "654321".to_string()
    }
}

fn state(cache: MockCache, queue: Arc<MockQueue>) -> web::Data<AppState<MockCache, MockQueue>> {
    let issuer = CodeIssuer::with_generator(
        Arc::new(cache),
        queue,
        Box::new(FixedCode),
        CodeIssuerConfig::new(QUEUE_URL),
    )
    .unwrap();
    web::Data::new(AppState::new(issuer))
}

fn send_code_request(body: &'static str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
}

#[actix_web::test]
async fn test_send_code_queues_email() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache::default(), queue.clone()))).await;

    let resp = test::call_service(&app, send_code_request(r#"{"email":"a@example.com"}"#).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Email queued");
    assert_eq!(
        queue.bodies.lock().unwrap().as_slice(),
        [r#"{"email":"a@example.com","code":"654321"}"#.to_string()]
    );
}

#[actix_web::test]
async fn test_send_code_malformed_body() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache::default(), queue.clone()))).await;

    let resp = test::call_service(&app, send_code_request("not json").to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Error occurred marshalling request body");
    assert!(queue.bodies.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_send_code_queue_failure() {
    let queue = Arc::new(MockQueue {
        should_fail: true,
        ..Default::default()
    });
    let app = test::init_service(create_app(state(MockCache::default(), queue))).await;

    let resp = test::call_service(&app, send_code_request(r#"{"email":"a@example.com"}"#).to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Error occurred queueing email");
}

#[actix_web::test]
async fn test_send_code_succeeds_when_cache_is_down() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache { should_fail: true }, queue.clone()))).await;

    let resp = test::call_service(&app, send_code_request(r#"{"email":"a@example.com"}"#).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    // The delivery request still goes out, carrying an empty code
    assert_eq!(
        queue.bodies.lock().unwrap().as_slice(),
        [r#"{"email":"a@example.com","code":""}"#.to_string()]
    );
}

#[actix_web::test]
async fn test_send_code_missing_email_field_is_queued() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache::default(), queue.clone()))).await;

    let resp = test::call_service(&app, send_code_request("{}").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        queue.bodies.lock().unwrap().as_slice(),
        [r#"{"email":"","code":"654321"}"#.to_string()]
    );
}

#[actix_web::test]
async fn test_send_code_invalid_utf8_in_email_is_replaced() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache::default(), queue.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .insert_header(("content-type", "application/json"))
        .set_payload(&b"{\"email\":\"a\xff@example.com\"}"[..])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        queue.bodies.lock().unwrap().as_slice(),
        ["{\"email\":\"a\u{FFFD}@example.com\",\"code\":\"654321\"}".to_string()]
    );
}

#[actix_web::test]
async fn test_send_code_null_body_is_rejected() {
    let queue = Arc::new(MockQueue::default());
    let app = test::init_service(create_app(state(MockCache::default(), queue.clone()))).await;

    let resp = test::call_service(&app, send_code_request("null").to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Error occurred marshalling request body");
    assert!(queue.bodies.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(state(MockCache::default(), Arc::default()))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(state(MockCache::default(), Arc::default()))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "NOT_FOUND");
}
