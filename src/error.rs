use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid webhook payload: {0}")]
    Payload(String),

    #[error("Failed to fetch diff: {0}")]
    DiffFetch(#[source] reqwest::Error),

    #[error("Failed to forward payload: {0}")]
    Forward(#[source] reqwest::Error),
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

// Callers only ever see a generic 500; the detail stays in the logs.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "❌ Webhook processing failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
