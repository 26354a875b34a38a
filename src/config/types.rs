//! Server settings read at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "TODO_BIND_ADDR";
pub const BODY_LIMIT_VAR: &str = "TODO_BODY_LIMIT";
pub const SEED_PATH_VAR: &str = "TODO_SEED_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
    /// Optional JSON array of todos loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit: DEFAULT_BODY_LIMIT,
            seed_path: None,
        }
    }
}
