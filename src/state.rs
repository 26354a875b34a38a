//! Shared application state for all routes. The store lives as long as the server process.

use crate::store::TodoStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
