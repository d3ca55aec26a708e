use std::sync::Arc;

use taskhub_db::repositories::{ProjectRepo, TaskRepo};
use taskhub_service::{ProjectService, TaskService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health check.
    pub pool: taskhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub projects: ProjectService,
    pub tasks: TaskService,
}

impl AppState {
    /// Wire the PostgreSQL repositories into their services.
    pub fn new(pool: taskhub_db::DbPool, config: ServerConfig) -> Self {
        let projects = ProjectService::new(Arc::new(ProjectRepo::new(pool.clone())));
        let tasks = TaskService::new(Arc::new(TaskRepo::new(pool.clone())));
        Self {
            pool,
            config: Arc::new(config),
            projects,
            tasks,
        }
    }
}
