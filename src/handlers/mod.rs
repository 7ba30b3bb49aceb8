// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token required)
pub mod protected; // /v2/* - JWT authentication required
pub mod public; // /auth/login, /v1/*, health, metrics and docs

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
