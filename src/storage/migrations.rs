//! # Database Migration Management
//!
//! Schema migrations are embedded in the binary and applied in order on
//! startup when `auto_migrate` is enabled. A tracking table records which
//! versions have already run so restarts are no-ops.

use crate::errors::{PorticoError, Result};
use crate::storage::DbPool;
use sqlx::Row;
use tracing::info;

/// Ordered list of embedded migrations: (version, description, sql).
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    1,
    "create routes table",
    r#"
    CREATE TABLE IF NOT EXISTS routes (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        methods    TEXT NOT NULL,
        path       TEXT NOT NULL,
        controller TEXT NOT NULL,
        config     TEXT NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
    CREATE INDEX IF NOT EXISTS idx_routes_path ON routes (path);
    "#,
)];

/// Run all pending database migrations
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    create_migration_table(pool).await?;

    let applied = applied_versions(pool).await?;

    let mut migrations_run = 0;
    for (version, description, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }

        sqlx::raw_sql(sql).execute(pool).await.map_err(|e| PorticoError::Database {
            source: e,
            context: format!("Failed to apply migration {} ({})", version, description),
        })?;

        sqlx::query("INSERT INTO schema_migrations (version, description) VALUES ($1, $2)")
            .bind(version)
            .bind(description)
            .execute(pool)
            .await
            .map_err(|e| PorticoError::Database {
                source: e,
                context: format!("Failed to record migration {}", version),
            })?;

        info!(version = version, description = description, "Applied migration");
        migrations_run += 1;
    }

    if migrations_run > 0 {
        info!(count = migrations_run, "Database migrations complete");
    }

    Ok(())
}

async fn create_migration_table(pool: &DbPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            installed_on DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| PorticoError::Database {
        source: e,
        context: "Failed to create schema_migrations table".to_string(),
    })?;

    Ok(())
}

async fn applied_versions(pool: &DbPool) -> Result<Vec<i64>> {
    let rows = sqlx::query("SELECT version FROM schema_migrations ORDER BY version")
        .fetch_all(pool)
        .await
        .map_err(|e| PorticoError::Database {
            source: e,
            context: "Failed to read applied migrations".to_string(),
        })?;

    Ok(rows.iter().map(|row| row.get::<i64, _>("version")).collect())
}
