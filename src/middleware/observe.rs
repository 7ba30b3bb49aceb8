use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use super::request_id::RequestId;
use crate::observability::RequestSample;
use crate::state::AppState;

/// Time each request, log it and record it in the observability state.
///
/// The route label is the matched route template (`/v1/patients/:id`) so that
/// metrics do not fan out per record id; unmatched requests fall back to the
/// raw path.
pub async fn observe_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status,
        latency_ms = duration_ms,
        "request completed"
    );

    state
        .observability
        .record(RequestSample {
            id: request_id,
            method,
            route,
            status,
            duration_ms,
            time: Utc::now(),
        })
        .await;

    response
}
