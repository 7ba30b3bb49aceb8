// handlers/public/docs.rs - landing page, Swagger UI and the raw OpenAPI document

use axum::{http::header::CONTENT_TYPE, response::Html, response::IntoResponse};

pub const OPENAPI_YAML: &str = include_str!("../../../assets/openapi.yaml");
const LANDING_HTML: &str = include_str!("../../../assets/index.html");
const SWAGGER_HTML: &str = include_str!("../../../assets/docs.html");

/// GET / - landing page with a live observability panel
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_HTML)
}

/// GET /docs - Swagger UI loaded from a CDN, pointed at /openapi.yaml
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// GET /openapi.yaml
pub async fn openapi_yaml() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/yaml; charset=utf-8")], OPENAPI_YAML)
}
