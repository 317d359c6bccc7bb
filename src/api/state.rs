use sqlx::SqlitePool;

use crate::config::Config;

/// Shared application state: the connection pool plus the loaded config.
/// Cloning is cheap; the pool is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}
