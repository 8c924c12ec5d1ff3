// POST /api/classify: JSON front end to the same pipeline as the form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::web::{api_error, classify_blocking, AppState};

#[derive(Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

pub async fn classify(State(state): State<AppState>, Json(body): Json<ClassifyRequest>) -> Response {
    match classify_blocking(state.classifier.clone(), body.text).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!(error = %e, "Classification task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Classification failed")
        }
    }
}
