//! Load server settings from the environment and seed todos from a JSON file.

use crate::config::types::*;
use crate::error::ConfigError;
use crate::model::Todo;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

impl ServerConfig {
    /// Load `.env` (if present) into the process env, then read settings from it.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_env()
    }

    /// Read settings from process env only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: BIND_ADDR_VAR,
            value: bind_raw.clone(),
        })?;

        let body_limit = match get(BODY_LIMIT_VAR) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: BODY_LIMIT_VAR,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            bind_addr,
            body_limit,
            seed_path: get(SEED_PATH_VAR).map(PathBuf::from),
        })
    }
}

/// Read a JSON array of todos. Ids must be present; uniqueness is checked by the store.
pub async fn load_seed_from_path(path: impl AsRef<Path>) -> Result<Vec<Todo>, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::SeedRead {
            path: display.clone(),
            source,
        })?;
    let todos: Vec<Todo> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse { path: display, source })?;
    tracing::info!(path = %path.display(), count = todos.len(), "loaded seed todos");
    Ok(todos)
}
