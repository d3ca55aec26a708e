//! Task entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskhub_core::task::{Domain, Priority};
use taskhub_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Task {
    pub task_id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[sqlx(try_from = "String")]
    pub domain: Domain,
    pub project_id: Option<DbId>,
    pub uni_module_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
    pub is_backlog: bool,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
