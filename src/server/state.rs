//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone; `DatabaseConnection` is a connection pool and clones share the pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
