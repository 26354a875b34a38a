use crate::handlers::todo::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET/POST /todos and GET/PATCH/DELETE /todos/:todo_id.
pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list).post(create))
        .route(
            "/todos/:todo_id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
