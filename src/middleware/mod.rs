pub mod auth;
pub mod observe;
pub mod request_id;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use observe::observe_middleware;
pub use request_id::{request_id_middleware, RequestId, HEADER_REQUEST_ID};
