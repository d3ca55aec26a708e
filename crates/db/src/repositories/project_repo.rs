//! Repository for the `projects` and `project_tech_stack` tables.

use async_trait::async_trait;
use taskhub_core::project::NewProject;
use taskhub_core::types::{DbId, Timestamp};

use crate::error::DbError;
use crate::models::project::Project;
use crate::repositories::ProjectRepository;
use crate::DbPool;

/// PostgreSQL-backed [`ProjectRepository`].
#[derive(Clone)]
pub struct ProjectRepo {
    pool: DbPool,
}

impl ProjectRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepo {
    /// Insert the project row and one link row per tech stack id in a single
    /// transaction. Any failing statement drops the transaction, which rolls
    /// back everything written so far.
    async fn create_project(&self, project: &NewProject) -> Result<Project, DbError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DbError::with_context("failed to begin transaction"))?;

        let (project_id, created_at, updated_at) =
            sqlx::query_as::<_, (DbId, Timestamp, Timestamp)>(
                "INSERT INTO projects (title, description, status, github_url, live_url)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING project_id, created_at, updated_at",
            )
            .bind(&project.title)
            .bind(&project.description)
            .bind(project.status.as_str())
            .bind(&project.github_url)
            .bind(&project.live_url)
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::with_context("failed to create project"))?;

        for tech_stack_item_id in &project.tech_stack_ids {
            sqlx::query(
                "INSERT INTO project_tech_stack (project_id, tech_stack_item_id)
                 VALUES ($1, $2)",
            )
            .bind(project_id)
            .bind(tech_stack_item_id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::with_context(
                "failed to associate tech stack item with project",
            ))?;
        }

        tx.commit()
            .await
            .map_err(DbError::with_context("failed to commit transaction"))?;

        tracing::debug!(
            %project_id,
            tech_stack_items = project.tech_stack_ids.len(),
            "Project persisted",
        );

        Ok(Project {
            project_id,
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack_ids: project.tech_stack_ids.clone(),
            status: project.status,
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            created_at,
            updated_at,
        })
    }
}
