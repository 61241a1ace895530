use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hookreg_core::error::CoreError;
use hookreg_registry::RegistryError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RegistryError`] for read
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hookreg_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A registry read failure.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- RegistryError variants ---
            AppError::Registry(registry) => match registry {
                RegistryError::Unauthenticated(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                RegistryError::HookNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Hook with id {id} not found"),
                ),
                RegistryError::CallerContext(msg) => {
                    tracing::error!(error = %msg, "Caller context failure");
                    internal_error()
                }
                RegistryError::Storage(err) => {
                    tracing::error!(error = %err, "Database error");
                    internal_error()
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Status, code, and sanitized message for failures the caller cannot fix.
fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
