//! Handlers for the `/tasks` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use taskhub_core::task::TaskInput;
use taskhub_core::types::DbId;
use taskhub_db::models::task::Task;

use crate::error::AppResult;
use crate::handlers::{decode_body, decode_path};
use crate::state::AppState;

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let input = decode_body(body)?;
    let task = state.tasks.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Task>> {
    let id = decode_path(path)?;
    let task = state.tasks.get_task_by_id(id).await?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// Responds 204 when no task has `id`: the overwrite is a no-op, not a 404.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> AppResult<Response> {
    let id = decode_path(path)?;
    let input = decode_body(body)?;
    let response = match state.tasks.update_task(id, input).await? {
        Some(task) => Json(task).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = decode_path(path)?;
    state.tasks.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /tasks/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = decode_path(path)?;
    state.tasks.toggle_status(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
