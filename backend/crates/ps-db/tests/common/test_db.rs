use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection that is never recycled
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ps_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Number of rows currently in the person table
pub async fn count_persons(pool: &SqlitePool) -> i64 {
    // Use sqlx::query_scalar (not query_scalar!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM person")
        .fetch_one(pool)
        .await
        .expect("Failed to count persons")
}
