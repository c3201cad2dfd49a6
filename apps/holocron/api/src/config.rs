use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::sql::DatabaseConfig;

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `RUN_MIGRATIONS`, default true
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // DATABASE_URL defaults to a local SQLite file
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            ["APP_ENV", "DATABASE_URL", "HOST", "PORT", "RUN_MIGRATIONS"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "holocron_api");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.address(), "0.0.0.0:3000");
                assert_eq!(config.database.url, database::sql::DEFAULT_DATABASE_URL);
                assert!(config.run_migrations);
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", Some("postgresql://holocron:secret@db/holocron")),
                ("PORT", Some("8080")),
                ("RUN_MIGRATIONS", Some("false")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 8080);
                assert!(!config.run_migrations);
            },
        );
    }

    #[test]
    fn test_invalid_run_migrations_flag() {
        temp_env::with_var("RUN_MIGRATIONS", Some("sometimes"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("RUN_MIGRATIONS"));
        });
    }
}
