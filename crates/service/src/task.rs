use std::sync::Arc;

use taskhub_core::error::CoreError;
use taskhub_core::task::TaskInput;
use taskhub_core::types::DbId;
use taskhub_db::models::task::Task;
use taskhub_db::repositories::TaskRepository;

const ENTITY: &str = "task";

/// CRUD over tasks with validation on every write.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

/// Nil UUIDs are never valid task ids.
fn require_id(id: DbId) -> Result<(), CoreError> {
    if id.is_nil() {
        return Err(CoreError::IdentifierRequired { entity: ENTITY });
    }
    Ok(())
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_task(&self, input: TaskInput) -> Result<Task, CoreError> {
        let task = input.validate()?;
        let created = self
            .repo
            .create(&task)
            .await
            .map_err(|e| CoreError::persistence("failed to create task", e))?;
        tracing::info!(task_id = %created.task_id, "Task created");
        Ok(created)
    }

    /// Overwrite every mutable field of task `id`.
    ///
    /// Returns `Ok(None)` when no task has that id; nothing is written.
    pub async fn update_task(&self, id: DbId, input: TaskInput) -> Result<Option<Task>, CoreError> {
        require_id(id)?;
        let task = input.validate()?;
        let updated = self
            .repo
            .update(id, &task)
            .await
            .map_err(|e| CoreError::persistence("failed to update task", e))?;
        if updated.is_none() {
            tracing::debug!(task_id = %id, "Update matched no task");
        }
        Ok(updated)
    }

    /// Fetch task `id`. A missing task surfaces as the store's "no rows" error.
    pub async fn get_task_by_id(&self, id: DbId) -> Result<Task, CoreError> {
        require_id(id)?;
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| CoreError::persistence("failed to fetch task", e))
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, CoreError> {
        self.repo
            .get_all()
            .await
            .map_err(|e| CoreError::persistence("failed to list tasks", e))
    }

    pub async fn delete_task(&self, id: DbId) -> Result<(), CoreError> {
        require_id(id)?;
        self.repo
            .delete(id)
            .await
            .map_err(|e| CoreError::persistence("failed to delete task", e))?;
        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }

    /// Flip the `completed` flag of task `id`.
    pub async fn toggle_status(&self, id: DbId) -> Result<(), CoreError> {
        require_id(id)?;
        self.repo
            .toggle_status(id)
            .await
            .map_err(|e| CoreError::persistence("failed to toggle task status", e))
    }
}
