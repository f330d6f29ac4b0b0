//! Stakeholder chat endpoint tests against the composed application

mod common;

use axum::{
    body::Body,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_LENGTH,
            CONTENT_TYPE,
        },
        Method, Request, StatusCode,
    },
};
use forge_app::{MAX_BODY_BYTES, STAKEHOLDER_AI_PATH};
use forge_common::Config;
use serde_json::json;

use crate::common::{parse_body, TestApp};

const PLACEHOLDER: &str =
    "This is the Stakeholder AI placeholder. Implement LLM integration per project requirements.";

#[tokio::test]
async fn test_preflight_allows_cross_origin() {
    let app = TestApp::new();
    let resp = app.chat(Method::OPTIONS, None).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
}

#[tokio::test]
async fn test_get_returns_405() {
    let app = TestApp::new();
    let resp = app.chat(Method::GET, None).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(parse_body(resp).await, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_post_empty_object_returns_400() {
    let app = TestApp::new();
    let resp = app.chat(Method::POST, Some("{}")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(resp).await, json!({"error": "Message is required"}));
}

#[tokio::test]
async fn test_post_message_returns_placeholder_reply() {
    let app = TestApp::new();
    let resp = app.chat(Method::POST, Some(r#"{"message":"hi"}"#)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let body = parse_body(resp).await;
    let conversation_id = body["conversation_id"].as_str().unwrap();
    assert!(!conversation_id.is_empty());
    assert!(uuid::Uuid::parse_str(conversation_id).is_ok());
    assert_eq!(body["message"]["role"], "assistant");
    assert_eq!(body["message"]["content"], PLACEHOLDER);
}

#[tokio::test]
async fn test_post_echoes_supplied_conversation_id() {
    let app = TestApp::new();
    let resp = app
        .chat(
            Method::POST,
            Some(r#"{"conversation_id":"abc","message":"hi"}"#),
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert_eq!(body["conversation_id"], "abc");
}

#[tokio::test]
async fn test_each_new_conversation_gets_its_own_id() {
    let app = TestApp::new();
    let first = parse_body(app.chat(Method::POST, Some(r#"{"message":"a"}"#)).await).await;
    let second = parse_body(app.chat(Method::POST, Some(r#"{"message":"b"}"#)).await).await;

    assert_ne!(first["conversation_id"], second["conversation_id"]);
}

#[tokio::test]
async fn test_malformed_body_returns_500_without_detail() {
    let app = TestApp::new();
    let resp = app.chat(Method::POST, Some("message=hi")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(parse_body(resp).await, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_oversized_body_returns_json_500() {
    let app = TestApp::new();
    let body = json!({ "message": "x".repeat(2 * MAX_BODY_BYTES) }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri(STAKEHOLDER_AI_PATH)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let resp = app.send(request).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(parse_body(resp).await, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_null_body_returns_400() {
    let app = TestApp::new();
    let resp = app.chat(Method::POST, Some("null")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(resp).await, json!({"error": "Message is required"}));
}

#[tokio::test]
async fn test_configured_reply_is_served() {
    let app = TestApp::with_config(Config {
        stakeholder_reply: Some("We'll be in touch.".to_string()),
        ..Config::default()
    });
    let resp = app.chat(Method::POST, Some(r#"{"message":"hi"}"#)).await;

    let body = parse_body(resp).await;
    assert_eq!(body["message"]["content"], "We'll be in touch.");
}
