//! Database test fixtures and utilities
//!
//! Provides a fixture that connects to the test database, applies
//! migrations, and starts every test from empty tables. Tests that
//! need it skip themselves when no database is reachable, so the rest
//! of the suite still runs on machines without Postgres.

use sqlx::PgPool;

/// Test database fixture
///
/// Connecting truncates both tables, so tests using this fixture must
/// not run concurrently with each other (mark them `#[serial]`).
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect to the test database
    ///
    /// Uses `TEST_DATABASE_URL`, falling back to `DATABASE_URL`.
    /// Returns `None` when neither is set or the database cannot be
    /// reached; callers should skip the test in that case:
    ///
    /// ```ignore
    /// let Some(db) = TestDatabase::try_new().await else {
    ///     eprintln!("skipping: no test database available");
    ///     return;
    /// };
    /// ```
    pub async fn try_new() -> Option<Self> {
        dotenv::dotenv().ok();

        let database_url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let pool = PgPool::connect(&database_url).await.ok()?;
        sqlx::migrate!("./migrations").run(&pool).await.ok()?;

        sqlx::query("TRUNCATE TABLE posts, users CASCADE")
            .execute(&pool)
            .await
            .ok()?;

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
