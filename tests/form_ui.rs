//! Form UI tests against a mocked relay API.

use std::time::Duration;

use article_relay::{
    api::models::SUBMITTED_MESSAGE,
    config::FormConfig,
    form::{create_router, page::RESULTS_NOTE, FormState},
};
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn spawn_form(backend_process_url: String) -> String {
    let state = FormState::new(&FormConfig {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        backend_process_url,
        backend_timeout: Duration::from_secs(25),
    })
    .expect("form state");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.expect("form server error");
    });
    format!("http://{}", addr)
}

async fn post_form(base: &str, email: &str, article_url: &str) -> String {
    let response = reqwest::Client::new()
        .post(format!("{}/", base))
        .form(&[("email", email), ("article_url", article_url)])
        .send()
        .await
        .expect("form request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.text().await.unwrap()
}

async fn relay_that_must_not_be_called() -> MockServer {
    let relay = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&relay)
        .await;
    relay
}

#[tokio::test]
async fn renders_empty_form() {
    let base = spawn_form("http://127.0.0.1:9/process".to_string()).await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Automated AI Article Analyzer"));
    assert!(html.contains("student@example.com"));
    assert!(html.contains("Sending request to backend..."));
    assert!(!html.contains(SUBMITTED_MESSAGE));
}

#[tokio::test]
async fn empty_fields_are_reported_without_calling_relay() {
    let relay = relay_that_must_not_be_called().await;
    let base = spawn_form(format!("{}/process", relay.uri())).await;

    let html = post_form(&base, "", "https://x.com").await;
    assert!(html.contains("Please fill in both fields."));

    let html = post_form(&base, "a@b.com", "").await;
    assert!(html.contains("Please fill in both fields."));
}

#[tokio::test]
async fn missing_field_renders_form_error() {
    let relay = relay_that_must_not_be_called().await;
    let base = spawn_form(format!("{}/process", relay.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/", base))
        .form(&[("email", "a@b.com")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Please fill in both fields."));
    assert!(html.contains("name=\"article_url\""));
}

#[tokio::test]
async fn invalid_inputs_are_reported_without_calling_relay() {
    let relay = relay_that_must_not_be_called().await;
    let base = spawn_form(format!("{}/process", relay.uri())).await;

    let html = post_form(&base, "bad-email", "https://x.com").await;
    assert!(html.contains("Please enter a valid email address."));
    assert!(!html.contains("Please provide a valid email address."));

    let html = post_form(&base, "a@b.com", "example.com").await;
    assert!(html.contains("Article URL must start with http"));
    assert!(html.contains("value=\"example.com\""));
}

#[tokio::test]
async fn successful_submission_shows_session_id() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({ "email": "a@b.com", "article_url": "https://x.com/post" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": SUBMITTED_MESSAGE,
            "session_id": "6f1c8e0e-3b0a-4a5e-9d1b-2f1f0f5b9c11",
        })))
        .expect(1)
        .mount(&relay)
        .await;
    let base = spawn_form(format!("{}/process", relay.uri())).await;

    let html = post_form(&base, " a@b.com ", " https://x.com/post ").await;

    assert!(html.contains(SUBMITTED_MESSAGE));
    assert!(html.contains("6f1c8e0e-3b0a-4a5e-9d1b-2f1f0f5b9c11"));
    assert!(html.contains(RESULTS_NOTE));
}

#[tokio::test]
async fn relay_error_status_asks_to_retry() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({ "detail": "nope" })))
        .expect(1)
        .mount(&relay)
        .await;
    let base = spawn_form(format!("{}/process", relay.uri())).await;

    let html = post_form(&base, "a@b.com", "https://x.com").await;

    assert!(html.contains("Could not process request right now. Please try again."));
    assert!(!html.contains(SUBMITTED_MESSAGE));
}

#[tokio::test]
async fn unreachable_relay_reports_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let base = spawn_form(format!("http://127.0.0.1:{}/process", port)).await;

    let html = post_form(&base, "a@b.com", "https://x.com").await;

    assert!(html.contains("Could not connect to backend server."));
}

#[tokio::test]
async fn form_health_reports_ok() {
    let base = spawn_form("http://127.0.0.1:9/process".to_string()).await;

    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "status": "ok" }));
}
