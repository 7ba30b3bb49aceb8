// handlers/public/patients.rs - v1 read-only patient endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Patient;

/// GET /v1/patients - all patients in insertion order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.store.list().await)
}

/// GET /v1/patients/:id - single patient, 404 when unknown
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.store.find(&id).await?))
}
