//! Repository for the `tasks` table.

use async_trait::async_trait;
use taskhub_core::task::NewTask;
use taskhub_core::types::DbId;

use crate::models::task::Task;
use crate::repositories::TaskRepository;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "task_id, title, description, priority, domain, project_id, \
    uni_module_id, deadline, is_backlog, completed, created_at, updated_at";

/// PostgreSQL-backed [`TaskRepository`].
#[derive(Clone)]
pub struct TaskRepo {
    pool: DbPool,
}

impl TaskRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for TaskRepo {
    async fn create(&self, task: &NewTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, priority, domain, project_id,
                                uni_module_id, deadline, is_backlog, completed)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.priority.as_str())
            .bind(task.domain.as_str())
            .bind(task.project_id)
            .bind(task.uni_module_id)
            .bind(task.deadline)
            .bind(task.is_backlog)
            .bind(task.completed)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: DbId, task: &NewTask) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                priority = $4,
                domain = $5,
                project_id = $6,
                uni_module_id = $7,
                deadline = $8,
                is_backlog = $9,
                completed = $10,
                updated_at = NOW()
             WHERE task_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.priority.as_str())
            .bind(task.domain.as_str())
            .bind(task.project_id)
            .bind(task.uni_module_id)
            .bind(task.deadline)
            .bind(task.is_backlog)
            .bind(task.completed)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Task, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE task_id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks");
        sqlx::query_as::<_, Task>(&query).fetch_all(&self.pool).await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tasks WHERE task_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn toggle_status(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE tasks SET completed = NOT completed, updated_at = NOW() WHERE task_id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
