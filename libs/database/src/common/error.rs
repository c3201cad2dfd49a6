/// Error type for connection, health and configuration failures
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors bubbled up from SeaORM / sqlx
    #[error("Database error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Health check query failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// The connection URL names a backend this crate cannot drive
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
