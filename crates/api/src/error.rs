use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskhub_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(kind) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    kind.to_string(),
                ),
                CoreError::IdentifierRequired { .. } => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", core.to_string())
                }
                CoreError::Persistence { source, .. } => {
                    classify_persistence_error(core, source.as_ref())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a persistence failure into an HTTP status, error code, and message.
///
/// - A bare `sqlx::Error::RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_persistence_error(
    err: &CoreError,
    source: &(dyn std::error::Error + Send + Sync + 'static),
) -> (StatusCode, &'static str, String) {
    if let Some(sqlx::Error::RowNotFound) = source.downcast_ref::<sqlx::Error>() {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    tracing::error!(error = %err, "Persistence error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
