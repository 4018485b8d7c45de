//! MySQL test infrastructure
//!
//! Provides a `TestDatabase` helper that starts a MySQL container and applies
//! the workspace migrations.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mysql::Mysql;

/// Test database wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host_port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get host port");

        // The image allows a passwordless root and creates the `test` database
        let connection_string = format!("mysql://root@127.0.0.1:{}/test", host_port);

        let connection = Database::connect(&connection_string)
            .await
            .expect("Failed to connect to test database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to apply migrations");

        tracing::info!(port = host_port, "Test database ready (MySQL)");

        Self {
            container,
            connection,
            connection_string,
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Insert a warehouse row directly and return its id.
    ///
    /// Useful for product tests that only need a valid `id_warehouse`.
    pub async fn create_test_warehouse(&self, name: &str) -> i32 {
        let result = self
            .connection
            .execute_unprepared(&format!(
                "INSERT INTO warehouses (name, address, telephone, capacity) \
                 VALUES ('{}', 'Test Street 1', '555-0100', 100)",
                name.replace('\'', "''")
            ))
            .await
            .expect("Failed to create test warehouse");

        i32::try_from(result.last_insert_id()).expect("Warehouse id out of range")
    }

    /// Remove every row, children first.
    pub async fn truncate(&self) {
        for table in ["products", "warehouses"] {
            self.connection
                .execute_unprepared(&format!("DELETE FROM {}", table))
                .await
                .expect("Failed to truncate table");
        }
    }
}

// Container is automatically cleaned up when TestDatabase is dropped
impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test database container");
    }
}
