//! SeaORM connection management, migrations and health checks

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, DatabaseConfig, backend_for_url};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry, run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseBackend, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
