//! HTTP interface: shared state and router construction.

mod routes;

use crate::application::prediction::PredictionService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

/// Builds the service router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(routes::hello))
        .route("/api/salary", post(routes::predict_salary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
