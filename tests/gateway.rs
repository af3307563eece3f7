//! Gateway tests against a real chat service bound to an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use chat_platform::agent::EchoAgent;
use chat_platform::db::InMemoryConversationStore;
use chat_platform::gateway::ChatServiceClient;
use chat_platform::service::chat_service::ChatService;
use chat_platform::{chat_service_router, gateway_router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn chat_service() -> String {
    let store = Arc::new(InMemoryConversationStore::new());
    serve(chat_service_router(ChatService::new(store, EchoAgent::new()))).await
}

fn gateway(upstream: &str) -> Router {
    let client = ChatServiceClient::new(upstream, Duration::from_secs(5)).expect("client");
    gateway_router(client)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn post_chat(content: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "content": content }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn chat_is_relayed_from_upstream() {
    let app = gateway(&chat_service().await);

    let (status, body) = send(&app, post_chat("Hello!")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Echo: Hello!");
    assert!(body["conversation_id"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn messages_endpoint_reads_real_history() {
    let app = gateway(&chat_service().await);

    let (_, turn) = send(&app, post_chat("ping")).await;
    let id = turn["conversation_id"].as_str().expect("conversation_id");

    let (status, messages) = send(&app, get(&format!("/conversations/{id}/messages"))).await;
    assert_eq!(status, StatusCode::OK);
    let messages = messages.as_array().expect("array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "ping");
    assert_eq!(messages[1]["content"], "Echo: ping");
}

#[tokio::test]
async fn unknown_conversation_is_404_through_gateway() {
    let app = gateway(&chat_service().await);

    let (status, body) = send(&app, get("/conversations/unknown/messages")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Conversation not found");
}

#[tokio::test]
async fn upstream_failure_status_is_mirrored() {
    let failing = Router::new().route(
        "/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let app = gateway(&serve(failing).await);

    let (status, body) = send(&app, post_chat("Hello!")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Chat Service Error" }));
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let app = gateway(&format!("http://{addr}"));

    let (status, body) = send(&app, post_chat("Hello!")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], "Chat Service Error");
}

#[tokio::test]
async fn gateway_health_reports_service_name() {
    let app = gateway("http://127.0.0.1:1");

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "api-gateway");
}
