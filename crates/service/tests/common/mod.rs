//! In-memory repository doubles for service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use taskhub_core::project::NewProject;
use taskhub_core::task::NewTask;
use taskhub_core::types::DbId;
use taskhub_db::models::project::Project;
use taskhub_db::models::task::Task;
use taskhub_db::repositories::{ProjectRepository, TaskRepository};
use taskhub_db::DbError;
use uuid::Uuid;

/// Project repository that records calls and optionally fails.
#[derive(Default)]
pub struct MockProjectRepo {
    pub calls: AtomicUsize,
    pub fail_with: Option<&'static str>,
}

impl MockProjectRepo {
    pub fn failing(context: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(context),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepo {
    async fn create_project(&self, project: &NewProject) -> Result<Project, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(context) = self.fail_with {
            return Err(DbError {
                context,
                source: sqlx::Error::PoolTimedOut,
            });
        }
        let now = Utc::now();
        Ok(Project {
            project_id: Uuid::new_v4(),
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack_ids: project.tech_stack_ids.clone(),
            status: project.status,
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Task repository backed by a `HashMap`, mirroring the SQL semantics:
/// missing ids are silently ignored by update/delete/toggle.
#[derive(Default)]
pub struct InMemoryTaskRepo {
    pub tasks: Mutex<HashMap<DbId, Task>>,
    pub writes: AtomicUsize,
}

impl InMemoryTaskRepo {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepo {
    async fn create(&self, task: &NewTask) -> Result<Task, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let row = Task {
            task_id: Uuid::new_v4(),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            domain: task.domain,
            project_id: task.project_id,
            uni_module_id: task.uni_module_id,
            deadline: task.deadline,
            is_backlog: task.is_backlog,
            completed: task.completed,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().insert(row.task_id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: DbId, task: &NewTask) -> Result<Option<Task>, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut tasks = self.tasks.lock().unwrap();
        let Some(row) = tasks.get_mut(&id) else {
            return Ok(None);
        };
        row.title = task.title.clone();
        row.description = task.description.clone();
        row.priority = task.priority;
        row.domain = task.domain;
        row.project_id = task.project_id;
        row.uni_module_id = task.uni_module_id;
        row.deadline = task.deadline;
        row.is_backlog = task.is_backlog;
        row.completed = task.completed;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn get_by_id(&self, id: DbId) -> Result<Task, sqlx::Error> {
        self.tasks
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn get_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        Ok(self.tasks.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.tasks.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn toggle_status(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(row) = self.tasks.lock().unwrap().get_mut(&id) {
            row.completed = !row.completed;
            row.updated_at = Utc::now();
        }
        Ok(())
    }
}
