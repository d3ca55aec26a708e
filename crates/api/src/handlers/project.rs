//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskhub_core::project::CreateProject;
use taskhub_db::models::project::Project;

use crate::error::AppResult;
use crate::handlers::decode_body;
use crate::state::AppState;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = decode_body(body)?;
    let project = state.projects.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
