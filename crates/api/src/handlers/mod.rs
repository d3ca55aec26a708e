//! Request handlers.
//!
//! Handlers decode the payload, delegate to the matching service in
//! `taskhub_service`, and map errors via [`AppError`].

pub mod project;
pub mod task;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning any decoding failure into a generic 400 so
/// malformed payloads never reach validation.
pub(crate) fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(AppError::BadRequest("Invalid request body".to_string()))
        }
    }
}

/// Unwrap a path parameter, reporting unparseable ids with the standard
/// error body instead of axum's plain-text rejection.
pub(crate) fn decode_path<T>(path: Result<Path<T>, PathRejection>) -> AppResult<T> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
            Err(AppError::BadRequest("Invalid path parameter".to_string()))
        }
    }
}
