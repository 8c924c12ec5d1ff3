// HTTP tests: drive the router in-process with tower's oneshot.

#![cfg(feature = "web")]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use batmi::classifier::Classifier;
use batmi::config::Config;
use batmi::topics::distribution::ConfidenceThresholds;
use batmi::web::{build_router, AppState};
use tower::ServiceExt;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn app() -> Router {
    let config = Config {
        model_path: fixture("lda_model.json"),
        dictionary_path: fixture("dictionary.json"),
        stopwords_path: fixture("marathi_stopwords.txt"),
        thresholds: ConfidenceThresholds::default(),
        port: 0,
        bind: "127.0.0.1".to_string(),
    };
    let classifier = Arc::new(Classifier::load(&config).unwrap());
    build_router(AppState { classifier })
}

/// Percent-encode a form value (every byte outside [A-Za-z0-9]).
fn form_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_form(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn get_root_serves_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Marathi News Topic Identifier"));
    assert!(html.contains(r#"action="/predict""#));
}

#[tokio::test]
async fn post_predict_renders_result_page() {
    let body = format!("text={}", form_encode("क्रिकेट सामना खेळाडू"));
    let response = app().oneshot(post_form(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<strong>Predicted Topics:</strong> Sports"));
    assert!(html.contains("Predicted Topic: Sports"));
    assert!(html.contains("<b>Sports</b>"));
    assert!(html.contains("<svg"));
    assert!(html.contains(r#"href="/""#));
}

#[tokio::test]
async fn post_predict_does_not_echo_markup() {
    let body = format!("text={}", form_encode("<script>alert(1)</script>"));
    let response = app().oneshot(post_form(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn post_predict_without_text_is_rejected() {
    let response = app().oneshot(post_form(String::new())).await.unwrap();
    assert!(response.status().is_client_error(), "{}", response.status());
}

#[tokio::test]
async fn api_classify_returns_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "text": "निवडणूक सरकार मंत्री" }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["top_label"], "Politics");
    assert_eq!(json["confident_labels"], serde_json::json!(["Politics"]));
    assert_eq!(json["distribution"].as_array().unwrap().len(), 5);
    assert_eq!(json["token_count"], 3);
}

#[tokio::test]
async fn health_reports_topic_count() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["topics"], 5);
}
