// handlers/public/system.rs - health, metrics and observability summary

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::observability::ObservabilitySummary;
use crate::state::AppState;

/// GET /health - liveness with process uptime in seconds
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime": state.observability.uptime(),
    }))
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.observability.render() {
        Ok(body) => (
            [(CONTENT_TYPE, state.observability.content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error generating metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating metrics").into_response()
        }
    }
}

/// GET /observability-summary - totals, average latency and recent requests
pub async fn observability_summary(State(state): State<AppState>) -> Json<ObservabilitySummary> {
    Json(state.observability.summary().await)
}
