//! Migrated test database
//!
//! `TestDatabase::sqlite()` gives every test its own in-memory SQLite
//! database with the real migrations applied. With the `postgres` feature,
//! `TestDatabase::postgres()` starts a container instead (see `postgres.rs`).

use database::sql::{DatabaseConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

/// Test database wrapper that ensures proper cleanup
///
/// Any container backing the database is stopped when this struct is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    pub connection_string: String,
    #[cfg(feature = "postgres")]
    pub(crate) container: Option<
        testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
    >,
}

impl TestDatabase {
    /// Fresh in-memory SQLite database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::sqlite().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn sqlite() -> Self {
        let config = DatabaseConfig::sqlite_in_memory();
        let connection_string = config.url().to_string();

        let connection = connect_from_config(config)
            .await
            .expect("Failed to open in-memory SQLite database");

        Self::from_connection(connection, connection_string).await
    }

    /// Alias for [`TestDatabase::sqlite`]
    pub async fn new() -> Self {
        Self::sqlite().await
    }

    pub(crate) async fn from_connection(
        connection: DatabaseConnection,
        connection_string: String,
    ) -> Self {
        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!(url = %connection_string, "Test database ready");

        Self {
            connection,
            connection_string,
            #[cfg(feature = "postgres")]
            container: None,
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Insert a user row and return its generated id
    ///
    /// The password hash is a placeholder; tests that need a verifiable hash
    /// go through the users repository instead.
    pub async fn create_test_user(&self, email: &str, first_name: &str, last_name: &str) -> i32 {
        let insert = format!(
            "INSERT INTO users (email, password_hash, first_name, last_name) VALUES ('{}', '$argon2id$v=19$m=19456,t=2,p=1$test$test', '{}', '{}')",
            escape(email),
            escape(first_name),
            escape(last_name)
        );
        self.connection
            .execute_unprepared(&insert)
            .await
            .expect("Failed to create test user");

        let select = format!("SELECT id FROM users WHERE email = '{}'", escape(email));
        let row = self
            .connection
            .query_one_raw(Statement::from_string(
                self.connection.get_database_backend(),
                select,
            ))
            .await
            .expect("Failed to read back test user")
            .expect("Test user row missing after insert");

        row.try_get::<i32>("", "id").expect("users.id is not an integer")
    }

    /// Number of rows currently in `table`
    pub async fn count_rows(&self, table: &str) -> i64 {
        let row = self
            .connection
            .query_one_raw(Statement::from_string(
                self.connection.get_database_backend(),
                format!("SELECT COUNT(*) AS count FROM {}", table),
            ))
            .await
            .unwrap_or_else(|e| panic!("Failed to count rows in {}: {}", table, e))
            .expect("COUNT(*) returned no row");

        row.try_get::<i64>("", "count").expect("COUNT(*) is not an integer")
    }

    /// Run raw SQL, for tests that need to bypass the repositories
    pub async fn execute(&self, sql: &str) -> Result<(), sea_orm::DbErr> {
        self.connection.execute_unprepared(sql).await.map(|_| ())
    }
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

// Container is automatically cleaned up when TestDatabase is dropped
impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!(url = %self.connection_string, "Dropping test database");
    }
}
