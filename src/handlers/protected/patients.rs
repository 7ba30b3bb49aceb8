// handlers/protected/patients.rs - v2 patient endpoints

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::types::{NewPatient, Patient};

/// GET /v2/patients
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Json<Vec<Patient>> {
    tracing::debug!("User '{}' listing patients", user.username);
    Json(state.store.list().await)
}

/// GET /v2/patients/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.store.find(&id).await?))
}

/// POST /v2/patients - create a patient from `{name, birthDate, condition?}`
///
/// A request without a JSON content type is treated as an empty body and
/// fails validation like any other body lacking the required fields.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let new_patient = match payload {
        Ok(Json(new_patient)) => new_patient,
        Err(JsonRejection::MissingJsonContentType(_)) => NewPatient::default(),
        Err(rejection) => return Err(ApiError::invalid_json(rejection.body_text())),
    };

    let patient = state.store.create(new_patient).await?;

    tracing::info!("User '{}' created patient {}", user.username, patient.id);

    Ok((StatusCode::CREATED, Json(patient)))
}
