use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{self, protected, public};
use crate::middleware::{jwt_auth_middleware, observe_middleware, request_id_middleware};
use crate::state::AppState;

/// Build the full application router around `state`.
///
/// Middleware order, outermost first: tracing, CORS, request id, observe.
/// The observe layer sits inside routing so it sees the matched route
/// template, and it also wraps the auth gate so rejected v2 calls are counted.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .merge(system_routes())
        .merge(docs_routes())
        .merge(auth_public_routes())
        .merge(v1_routes())
        // Protected
        .merge(v2_routes(state.clone()))
        .fallback(handlers::not_found)
        // Global middleware
        .layer(middleware::from_fn_with_state(
            state.clone(),
            observe_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn system_routes() -> Router<AppState> {
    use public::system;

    Router::new()
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics))
        .route("/observability-summary", get(system::observability_summary))
}

fn docs_routes() -> Router<AppState> {
    use public::docs;

    Router::new()
        .route("/", get(docs::landing))
        .route("/docs", get(docs::swagger_ui))
        .route("/openapi.yaml", get(docs::openapi_yaml))
}

fn auth_public_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(public::auth::login_post))
}

fn v1_routes() -> Router<AppState> {
    use public::patients;

    Router::new()
        .route("/v1/patients", get(patients::list))
        .route("/v1/patients/:id", get(patients::get))
}

fn v2_routes(state: AppState) -> Router<AppState> {
    use protected::patients;

    Router::new()
        .route("/v2/patients", get(patients::list).post(patients::create))
        .route("/v2/patients/:id", get(patients::get))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
