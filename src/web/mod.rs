// Web server: Axum-based form front end and JSON API.
//
// GET  /              input form
// POST /predict       form submission → HTML result page with chart
// POST /api/classify  JSON in, Classification JSON out
// GET  /health        liveness check
//
// The classifier is loaded before the listener binds and shared read-only
// through AppState. Inference is CPU-bound, so handlers run it on the
// blocking pool.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::classifier::{Classification, Classifier};

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(classifier: Arc<Classifier>, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState { classifier });

    let addr = format!("{bind}:{port}");
    info!("Marathi topic identifier listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form::form_get))
        .route("/predict", post(handlers::form::form_post))
        .route("/api/classify", post(handlers::classify::classify))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "topics": state.classifier.num_topics(),
        })),
    )
}

/// Run the pipeline on the blocking pool.
///
/// The pipeline itself never fails; the only error is a panicked task.
pub async fn classify_blocking(
    classifier: Arc<Classifier>,
    text: String,
) -> Result<Classification, tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || classifier.classify(&text)).await
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
