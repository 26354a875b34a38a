use crate::handlers::common::{health, openapi, version};
use axum::{routing::get, Router};

/// Common routes (no state): GET /health, GET /version, GET /openapi.json.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
}
