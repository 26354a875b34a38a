//! Todo CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::TodoId;
use crate::model::{Todo, TodoPayload};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

/// A JSON body that may be the literal `null`. Absent, null and malformed bodies all become 400.
fn require_body(
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<TodoPayload, AppError> {
    let Json(body) = payload?;
    body.ok_or_else(|| AppError::BadRequest("todo body must not be null".into()))
}

#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses((status = 200, description = "All todos in insertion order", body = [Todo]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.store.get_all()?;
    tracing::debug!(count = todos.len(), "list todos");
    Ok(ok(todos))
}

#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = Todo),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn read(
    TodoId(id): TodoId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(id, "read todo");
    let todo = state
        .store
        .find_by_id(id)?
        .ok_or_else(|| AppError::todo_not_found(id))?;
    Ok(ok(todo))
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = TodoPayload,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Malformed or null body")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = require_body(payload)?;
    let todo = state.store.add(body)?;
    tracing::info!(id = todo.id, "todo created");
    Ok(created(todo))
}

#[utoipa::path(
    patch,
    path = "/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    request_body = TodoPayload,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Malformed or null body"),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn update(
    TodoId(id): TodoId,
    State(state): State<AppState>,
    payload: Result<Json<Option<TodoPayload>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = require_body(payload)?;
    let todo = state.store.update_by_id(id, body)?;
    tracing::info!(id, "todo updated");
    Ok(ok(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = "todos",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo deleted; body is the removed todo", body = Todo),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn delete(
    TodoId(id): TodoId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.store.delete_by_id(id)?;
    tracing::info!(id, "todo deleted");
    Ok(ok(todo))
}
