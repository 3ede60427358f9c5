//! Database connection pool management
//!
//! Uses sqlx PgPool with a fixed connection limit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Open the pool and verify the server answers a query.
///
/// This is the startup path: any error here means the process should
/// exit before serving requests.
///
/// # Example
///
/// ```ignore
/// let pool = connect("postgres://localhost/school").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = create_pool(database_url).await?;
    ping(&pool).await?;
    Ok(pool)
}

/// Round-trip a trivial query.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
