//! Todo API: in-memory CRUD REST backend for Todo items.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{load_seed_from_path, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Todo, TodoPayload};
pub use logging::init_tracing;
pub use openapi::ApiDoc;
pub use routes::{app, common_routes, todo_routes};
pub use state::AppState;
pub use store::TodoStore;
