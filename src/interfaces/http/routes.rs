//! API route handlers

use super::AppState;
use crate::domain::validation::{self, ValidationReport};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub status: bool,
    #[serde(rename = "Salary")]
    pub salary: f64,
    pub currency: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ValidationFailureResponse {
    pub status: bool,
    pub detail: ValidationReport,
}

#[derive(Debug, Serialize)]
pub struct MalformedBodyResponse {
    pub status: bool,
    pub error: &'static str,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct InternalErrorResponse {
    pub status: bool,
    pub error: String,
}

/// Liveness probe; answers regardless of model state.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "hello world",
    })
}

/// Salary prediction endpoint.
///
/// The body is taken as raw bytes rather than a typed extractor because a
/// malformed payload and a well-formed-but-invalid record must produce
/// different response shapes.
pub async fn predict_salary(State(state): State<AppState>, body: Bytes) -> Response {
    let parsed: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => return malformed_body(e.to_string()),
    };
    let Some(raw) = parsed.as_object() else {
        return malformed_body("request body must be a JSON object".to_string());
    };

    let record = match validation::validate(raw) {
        Ok(record) => record,
        Err(detail) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationFailureResponse {
                    status: false,
                    detail,
                }),
            )
                .into_response();
        }
    };

    match state.service.predict(&record) {
        Ok(result) => (
            StatusCode::OK,
            Json(PredictionResponse {
                status: true,
                salary: result.salary,
                currency: result.currency,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Inference failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorResponse {
                    status: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn malformed_body(detail: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MalformedBodyResponse {
            status: false,
            error: "Invalid JSON format",
            detail,
        }),
    )
        .into_response()
}
