// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route in this tier sits behind `jwt_auth_middleware`, so handlers
// can rely on an `AuthUser` request extension being present.

pub mod patients;
