//! Shared fixtures for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use portal_products::db::{DbConnection, DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File-backed sqlite database that is migrated on creation and removed,
/// together with its WAL side files, when the test ends.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // stale file from an aborted run

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        pool.get()
            .expect("Failed to get SQLite connection from pool.")
            .run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Check a raw connection out of the pool, for seeding rows directly.
    #[allow(dead_code)]
    pub fn conn(&self) -> DbConnection {
        self.pool
            .get()
            .expect("Failed to get SQLite connection from pool.")
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for path in [
            self.filename.clone(),
            format!("{}-shm", self.filename),
            format!("{}-wal", self.filename),
        ] {
            std::fs::remove_file(path).ok();
        }
    }
}
