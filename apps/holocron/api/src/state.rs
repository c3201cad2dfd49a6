//! Shared application state.

use sea_orm::DatabaseConnection;

/// Cloned into the routers that need it; the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
