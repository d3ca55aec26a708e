//! Repository capability traits and their PostgreSQL implementations.
//!
//! Services hold these as `Arc<dyn ...>` so tests can substitute in-memory
//! doubles for the database.

use async_trait::async_trait;
use taskhub_core::project::NewProject;
use taskhub_core::task::NewTask;
use taskhub_core::types::DbId;

use crate::error::DbError;
use crate::models::project::Project;
use crate::models::task::Task;

pub mod project_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;

/// Storage operations for projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a project and all of its tech stack links atomically.
    async fn create_project(&self, project: &NewProject) -> Result<Project, DbError>;
}

/// Storage operations for tasks. Each call is a single statement.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task, returning the row with server-assigned fields.
    async fn create(&self, task: &NewTask) -> Result<Task, sqlx::Error>;

    /// Overwrite every mutable field of the task with `id`.
    ///
    /// Returns `None` when no row matched; that is not treated as an error.
    async fn update(&self, id: DbId, task: &NewTask) -> Result<Option<Task>, sqlx::Error>;

    /// Fetch one task. A missing row is reported as [`sqlx::Error::RowNotFound`].
    async fn get_by_id(&self, id: DbId) -> Result<Task, sqlx::Error>;

    /// Fetch every task in store order.
    async fn get_all(&self) -> Result<Vec<Task>, sqlx::Error>;

    /// Delete the task with `id`. Deleting a missing id is not an error.
    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error>;

    /// Flip `completed` in place. Toggling a missing id is not an error.
    async fn toggle_status(&self, id: DbId) -> Result<(), sqlx::Error>;
}
