//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Embedded database migrations, applied via the migrate CLI command or on
/// startup when `database.auto_migrate` is enabled.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count increment).
/// Structures holding AsyncDbPool can derive Clone without additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates an async database connection pool from the database settings.
///
/// # Errors
///
/// Returns `AppError::ConnectionPool` if the pool cannot be built against
/// the configured URL.
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.clone());

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::from(e),
        })?;

    Ok(pool)
}

/// Establishes a blocking connection for migration work.
///
/// The migration harness is synchronous, so migration commands run on a
/// dedicated blocking task with a plain diesel connection.
fn establish_sync_connection(database_url: &str) -> Result<diesel::PgConnection, AppError> {
    use diesel::Connection;

    diesel::PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "establish connection for migrations".to_string(),
        source: anyhow::anyhow!("Connection error: {}", e),
    })
}

/// Applies all pending migrations, returning the applied version names.
pub async fn run_pending_migrations(database_url: String) -> Result<Vec<String>, AppError> {
    tokio::task::spawn_blocking(move || {
        use diesel_migrations::MigrationHarness;

        let mut conn = establish_sync_connection(&database_url)?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Counts migrations that have not been applied yet.
pub async fn count_pending_migrations(database_url: String) -> Result<usize, AppError> {
    tokio::task::spawn_blocking(move || {
        use diesel_migrations::MigrationHarness;

        let mut conn = establish_sync_connection(&database_url)?;

        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "check pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        Ok::<_, AppError>(pending.len())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Reverts the most recent `steps` migrations, returning the reverted
/// version names.
pub async fn revert_migrations(database_url: String, steps: u32) -> Result<Vec<String>, AppError> {
    tokio::task::spawn_blocking(move || {
        use diesel_migrations::MigrationHarness;

        let mut conn = establish_sync_connection(&database_url)?;

        let mut reverted = Vec::new();
        for _ in 0..steps {
            let version = conn
                .revert_last_migration(MIGRATIONS)
                .map_err(|e| AppError::Database {
                    operation: "revert migration".to_string(),
                    source: anyhow::anyhow!("Migration error: {}", e),
                })?;
            reverted.push(version.to_string());
        }

        Ok::<_, AppError>(reverted)
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}
