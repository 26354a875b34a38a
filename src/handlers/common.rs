//! Health, version and API document handlers.

use crate::openapi::ApiDoc;
use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
