//! Extract the todo id from the `{todo-id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Todo id parsed from the last path parameter. Rejects with 400 when it is not an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.parse::<i64>()
            .map(TodoId)
            .map_err(|_| AppError::BadRequest(format!("invalid todo id: '{}'", raw)))
    }
}
