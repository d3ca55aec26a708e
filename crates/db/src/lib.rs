//! PostgreSQL persistence for projects and tasks.
//!
//! Exposes pool bootstrap helpers, row models, and the repository traits the
//! service layer depends on together with their PostgreSQL implementations.

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Embedded migrations from `db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Tables every repository query relies on.
pub const REQUIRED_TABLES: &[&str] = &[
    "projects",
    "project_tech_stack",
    "tasks",
    "tech_stack_items",
    "uni_modules",
];

/// Snapshot of how far the live schema matches the embedded migrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaHealth {
    pub migrations_applied: i64,
    pub migrations_expected: usize,
    pub missing_tables: Vec<String>,
}

impl SchemaHealth {
    /// Every embedded migration ran and no required table is missing.
    pub fn is_current(&self) -> bool {
        self.missing_tables.is_empty()
            && usize::try_from(self.migrations_applied).is_ok_and(|n| n >= self.migrations_expected)
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Count successful migrations and list required tables that do not exist.
///
/// Fails when the migrations bookkeeping table itself is absent, i.e. the
/// database was never migrated.
pub async fn schema_health(pool: &DbPool) -> Result<SchemaHealth, sqlx::Error> {
    let migrations_applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;

    let missing_tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM unnest($1::text[]) AS name WHERE to_regclass(name) IS NULL",
    )
    .bind(REQUIRED_TABLES)
    .fetch_all(pool)
    .await?;

    Ok(SchemaHealth {
        migrations_applied,
        migrations_expected: MIGRATOR.iter().count(),
        missing_tables,
    })
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
