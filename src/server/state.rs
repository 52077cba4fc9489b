//! Application state shared across all request handlers.
//!
//! `AppState` is constructed once in `main` and handed to the router; Axum clones it for
//! each request. There is no process-wide server or connection singleton.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool whose clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
