//! Database library providing SeaORM connectors and utilities for PostgreSQL and SQLite
//!
//! The backend is picked from the connection URL scheme, so the same binary can run
//! against a local SQLite file during development and PostgreSQL in production.
//!
//! # Features
//!
//! - `config` (default) - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ```ignore
//! use database::sql;
//! use migration::Migrator;
//!
//! let db = sql::connect("sqlite://holocron.db?mode=rwc").await?;
//! sql::run_migrations::<Migrator>(&db, "holocron_api").await?;
//! ```
//!
//! ```ignore
//! use database::sql::{DatabaseConfig, connect_from_config_with_retry};
//! use core_config::FromEnv;
//!
//! let config = DatabaseConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;
pub mod repository;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
pub use repository::BaseRepository;
