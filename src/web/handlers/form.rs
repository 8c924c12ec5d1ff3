// HTML form handlers: GET / and POST /predict.
//
// POST /predict takes the urlencoded `text` field, classifies it and renders
// the result page. A missing field is rejected by the Form extractor before
// the handler runs.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::output::html::{form_page, result_page};
use crate::web::{classify_blocking, AppState};

#[derive(Deserialize)]
pub struct PredictForm {
    pub text: String,
}

/// GET /: the input form.
pub async fn form_get() -> Html<String> {
    Html(form_page())
}

/// POST /predict: classify the submitted text and render the result page.
pub async fn form_post(State(state): State<AppState>, Form(form): Form<PredictForm>) -> Response {
    match classify_blocking(state.classifier.clone(), form.text).await {
        Ok(result) => {
            info!(
                tokens = result.token_count,
                top = %result.top_label,
                labels = %result.confident_labels.join(", "),
                "Classified form submission"
            );
            Html(result_page(&result)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Classification task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h2>Classification failed</h2><a href='/'>Try Another</a>".to_string()),
            )
                .into_response()
        }
    }
}
