//! Route Store
//!
//! CRUD operations for the persisted `routes` table. The store is expressed
//! as a trait so handlers receive it as a constructor-provided capability
//! and tests can substitute an in-memory or counting implementation.

use crate::errors::{PorticoError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::instrument;
use utoipa::ToSchema;

/// Path prefixes reserved for system-internal routes. Rows under these
/// prefixes exist in the table but are never exposed through listings.
pub const RESERVED_PATH_PREFIXES: &[&str] = &["/backend", "/documentation"];

/// Internal database row structure for routes.
#[derive(Debug, Clone, FromRow)]
struct RouteRow {
    pub id: i64,
    pub methods: String,
    pub path: String,
    pub controller: String,
    pub config: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted route: an HTTP path pattern plus method set mapped to a
/// controller identifier and its configuration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub methods: Vec<String>,
    pub path: String,
    /// Controller identifier in internal separator form.
    pub controller: String,
    pub config: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RouteRow> for Route {
    type Error = PorticoError;

    fn try_from(row: RouteRow) -> Result<Self> {
        let methods: Vec<String> = serde_json::from_str(&row.methods).map_err(|e| {
            PorticoError::Serialization {
                source: e,
                context: format!("Failed to decode methods for route {}", row.id),
            }
        })?;
        let config: serde_json::Value = serde_json::from_str(&row.config).map_err(|e| {
            PorticoError::Serialization {
                source: e,
                context: format!("Failed to decode config for route {}", row.id),
            }
        })?;

        Ok(Self {
            id: row.id,
            methods,
            path: row.path,
            controller: row.controller,
            config,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// The four mutable route fields, as written by create and update.
/// `controller` is expected in internal separator form by the time it
/// reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRecord {
    pub methods: Vec<String>,
    pub path: String,
    pub controller: String,
    pub config: serde_json::Value,
}

/// Listing filter. Reserved prefixes are always excluded; a non-empty
/// `search` additionally restricts results to paths containing it.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub search: Option<String>,
}

impl RouteFilter {
    /// Normalized search term: `None` when absent or empty, so an empty
    /// search behaves identically to no search.
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Persistence contract for route rows.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Count routes matching the filter, reserved prefixes excluded.
    async fn count(&self, filter: &RouteFilter) -> Result<i64>;

    /// List routes matching the filter in descending id order, starting at
    /// `start_index`. No page-size cap is applied at this layer.
    async fn list(&self, start_index: i64, filter: &RouteFilter) -> Result<Vec<Route>>;

    /// Insert a new route; the store assigns the id.
    async fn create(&self, record: RouteRecord) -> Result<Route>;

    /// Replace all four mutable fields of the route identified by `id`.
    async fn update(&self, id: i64, record: RouteRecord) -> Result<()>;

    /// Delete the route identified by `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// SQLite-backed route store.
#[derive(Debug, Clone)]
pub struct SqlRouteStore {
    pool: DbPool,
}

impl SqlRouteStore {
    /// Creates a new store with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn encode_record(record: &RouteRecord) -> Result<(String, String)> {
        let methods = serde_json::to_string(&record.methods)?;
        let config = serde_json::to_string(&record.config)?;
        Ok((methods, config))
    }
}

#[async_trait]
impl RouteStore for SqlRouteStore {
    #[instrument(skip(self, filter), name = "db_count_routes")]
    async fn count(&self, filter: &RouteFilter) -> Result<i64> {
        let query = match filter.search_term() {
            Some(_) => {
                "SELECT COUNT(*) FROM routes \
                 WHERE path NOT LIKE $1 AND path NOT LIKE $2 AND path LIKE $3"
            }
            None => "SELECT COUNT(*) FROM routes WHERE path NOT LIKE $1 AND path NOT LIKE $2",
        };

        let mut q = sqlx::query_scalar::<_, i64>(query)
            .bind(format!("{}%", RESERVED_PATH_PREFIXES[0]))
            .bind(format!("{}%", RESERVED_PATH_PREFIXES[1]));
        if let Some(search) = filter.search_term() {
            q = q.bind(format!("%{}%", search));
        }

        q.fetch_one(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count routes");
            PorticoError::Database { source: e, context: "Failed to count routes".to_string() }
        })
    }

    #[instrument(skip(self, filter), fields(start_index = start_index), name = "db_list_routes")]
    async fn list(&self, start_index: i64, filter: &RouteFilter) -> Result<Vec<Route>> {
        let query = match filter.search_term() {
            Some(_) => {
                "SELECT id, methods, path, controller, config, created_at, updated_at \
                 FROM routes \
                 WHERE path NOT LIKE $1 AND path NOT LIKE $2 AND path LIKE $3 \
                 ORDER BY id DESC LIMIT -1 OFFSET $4"
            }
            None => {
                "SELECT id, methods, path, controller, config, created_at, updated_at \
                 FROM routes \
                 WHERE path NOT LIKE $1 AND path NOT LIKE $2 \
                 ORDER BY id DESC LIMIT -1 OFFSET $3"
            }
        };

        let mut q = sqlx::query_as::<_, RouteRow>(query)
            .bind(format!("{}%", RESERVED_PATH_PREFIXES[0]))
            .bind(format!("{}%", RESERVED_PATH_PREFIXES[1]));
        if let Some(search) = filter.search_term() {
            q = q.bind(format!("%{}%", search));
        }
        q = q.bind(start_index);

        let rows = q.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list routes");
            PorticoError::Database { source: e, context: "Failed to list routes".to_string() }
        })?;

        rows.into_iter().map(Route::try_from).collect()
    }

    #[instrument(skip(self, record), fields(path = %record.path), name = "db_create_route")]
    async fn create(&self, record: RouteRecord) -> Result<Route> {
        let (methods, config) = Self::encode_record(&record)?;
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO routes (methods, path, controller, config, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&methods)
        .bind(&record.path)
        .bind(&record.controller)
        .bind(&config)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, path = %record.path, "Failed to create route");
            PorticoError::Database {
                source: e,
                context: format!("Failed to create route '{}'", record.path),
            }
        })?;

        let id = result.last_insert_rowid();
        tracing::info!(id = id, path = %record.path, "Created route");

        Ok(Route {
            id,
            methods: record.methods,
            path: record.path,
            controller: record.controller,
            config: record.config,
            created_at: now,
            updated_at: now,
        })
    }

    #[instrument(skip(self, record), fields(id = id), name = "db_update_route")]
    async fn update(&self, id: i64, record: RouteRecord) -> Result<()> {
        let (methods, config) = Self::encode_record(&record)?;
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE routes SET methods = $1, path = $2, controller = $3, config = $4, \
             updated_at = $5 WHERE id = $6",
        )
        .bind(&methods)
        .bind(&record.path)
        .bind(&record.controller)
        .bind(&config)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, id = id, "Failed to update route");
            PorticoError::Database {
                source: e,
                context: format!("Failed to update route '{}'", id),
            }
        })?;

        if result.rows_affected() != 1 {
            return Err(PorticoError::not_found("Route", id));
        }

        tracing::info!(id = id, path = %record.path, "Updated route");
        Ok(())
    }

    #[instrument(skip(self), fields(id = id), name = "db_delete_route")]
    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id = id, "Failed to delete route");
                PorticoError::Database {
                    source: e,
                    context: format!("Failed to delete route '{}'", id),
                }
            })?;

        if result.rows_affected() != 1 {
            return Err(PorticoError::not_found("Route", id));
        }

        tracing::info!(id = id, "Deleted route");
        Ok(())
    }
}
