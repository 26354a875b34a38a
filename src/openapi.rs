//! OpenAPI document for the Todo routes.

use crate::handlers::todo;
use crate::model::{Todo, TodoPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "todo-api"),
    paths(todo::list, todo::read, todo::create, todo::update, todo::delete),
    components(schemas(Todo, TodoPayload)),
    tags((name = "todos", description = "Todo CRUD"))
)]
pub struct ApiDoc;
