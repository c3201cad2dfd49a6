use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::DatabaseConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect with the default pool settings of [`DatabaseConfig`]
///
/// ```ignore
/// let db = database::sql::connect("sqlite::memory:").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(DatabaseConfig::new(database_url)).await
}

pub async fn connect_from_config(config: DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connect with exponential backoff, for services that may start before their database.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_with_retry(
    database_url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    connect_from_config_with_retry(DatabaseConfig::new(database_url), retry_config).await
}

pub async fn connect_from_config_with_retry(
    config: DatabaseConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff(attempt, retry_config).await,
        None => retry(attempt).await,
    }
}

/// Apply all pending migrations of `M`
///
/// ```ignore
/// use migration::Migrator;
///
/// database::sql::run_migrations::<Migrator>(&db, "holocron_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
