// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition, the read-only v1 patient API, operational endpoints and
// the documentation pages.

pub mod auth;
pub mod docs;
pub mod patients;
pub mod system;
