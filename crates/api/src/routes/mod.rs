pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /projects       project creation
/// /tasks          task CRUD and completion toggle
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
