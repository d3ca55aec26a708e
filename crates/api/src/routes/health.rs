use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use taskhub_db::SchemaHealth;

use crate::state::AppState;

/// `GET /health` payload.
///
/// `status` is `"ok"` only when the database answers and its schema has
/// every embedded migration and required table; otherwise `"degraded"`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_reachable: bool,
    /// Absent when the schema could not be inspected at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaHealth>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_reachable = match taskhub_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable");
            false
        }
    };

    let schema = if db_reachable {
        match taskhub_db::schema_health(&state.pool).await {
            Ok(schema) => Some(schema),
            Err(e) => {
                tracing::warn!(error = %e, "Could not inspect database schema");
                None
            }
        }
    } else {
        None
    };

    let healthy = schema.as_ref().is_some_and(SchemaHealth::is_current);
    if let Some(schema) = schema.as_ref().filter(|_| !healthy) {
        tracing::warn!(
            migrations_applied = schema.migrations_applied,
            migrations_expected = schema.migrations_expected,
            missing_tables = ?schema.missing_tables,
            "Database schema is behind",
        );
    }

    Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_reachable,
        schema,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
