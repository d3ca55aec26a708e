use std::sync::Arc;

use taskhub_core::error::CoreError;
use taskhub_core::project::CreateProject;
use taskhub_db::models::project::Project;
use taskhub_db::repositories::ProjectRepository;

/// Creates projects. Projects have no update or delete operations.
#[derive(Clone)]
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// Validate `input` and persist it with its tech stack links.
    ///
    /// Validation failures are returned before the repository is called.
    pub async fn create_project(&self, input: CreateProject) -> Result<Project, CoreError> {
        let project = input.validate()?;

        let created = self
            .repo
            .create_project(&project)
            .await
            .map_err(|e| CoreError::persistence("failed to create project", e))?;

        tracing::info!(
            project_id = %created.project_id,
            status = %created.status,
            "Project created",
        );
        Ok(created)
    }
}
