//! Router assembly: Todo CRUD routes plus common operational routes.

mod common;
mod todo;

pub use common::common_routes;
pub use todo::todo_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Full application router. Request bodies above `body_limit` bytes are rejected with 413.
/// axum's own 2 MiB default is disabled so `body_limit` is the only cap.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(todo_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
}
