// handlers/public/auth/login.rs - POST /auth/login handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Accepted login body.
///
/// The flat `username` / `password` fields are the supported contract.
/// `{"login": {...}}` is still read for older clients, but only for a field
/// the flat shape leaves out.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub login: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Credentials {
        let legacy = match self.login {
            Some(Value::Object(mut fields)) => (fields.remove("username"), fields.remove("password")),
            _ => (None, None),
        };

        Credentials {
            username: credential_text(self.username).or_else(|| credential_text(legacy.0)),
            password: credential_text(self.password).or_else(|| credential_text(legacy.1)),
        }
    }
}

/// Reads one credential field.
///
/// `null`, `false` and `0` count as absent. Other non-string values are kept
/// as their JSON text so they reach the credential check and fail there.
fn credential_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// POST /auth/login - Authenticate and receive a bearer token
///
/// ```json
/// { "username": "admin", "password": "password123" }
/// ```
///
/// Responds 200 with `{ "message": "Login successful", "token": "..." }`,
/// 400 when either field is missing, 401 on bad credentials and 500 when no
/// signing secret is configured.
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    // An unreadable body is treated the same as one without credentials
    let credentials = match payload {
        Ok(Json(request)) => request.into_credentials(),
        Err(rejection) => {
            tracing::debug!("Login body rejected: {}", rejection.body_text());
            Credentials::default()
        }
    };

    let username = credentials.username.unwrap_or_default();
    let password = credentials.password.unwrap_or_default();

    tracing::info!("Login attempt for user '{}'", username);

    let token = state.tokens.issue(&username, &password).await.map_err(|e| {
        tracing::warn!("Login failed for user '{}': {}", username, e);
        ApiError::from(e)
    })?;

    tracing::info!("Issued token for user '{}'", username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
