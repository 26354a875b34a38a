//! Todo API server: reads settings from env (and `.env`), seeds the store, serves HTTP.
//!
//! Run from repo root: `cargo run -p todo-server`

use todo_api::{app, init_tracing, load_seed_from_path, AppState, ServerConfig, TodoStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("todo_api=info,todo_server=info");

    let config = ServerConfig::load()?;
    let store = match &config.seed_path {
        Some(path) => TodoStore::with_todos(load_seed_from_path(path).await?)?,
        None => TodoStore::new(),
    };
    let state = AppState::new(store);

    let router = app(state, config.body_limit);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("todo api listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
