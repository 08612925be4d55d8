use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use deckforge_core::error::CoreError;
use deckforge_slides::executor::ExecError;
use deckforge_slides::service::SlidesApiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error kinds and implements [`IntoResponse`] so
/// every failure surfaces as the same `{ success: false, message }`
/// JSON shape with a non-200 status. Callers of the API can branch on
/// the status; the message carries the failure detail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation or asset failure from plan construction.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure while executing the plan against the remote service.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A malformed request (e.g. unreadable multipart body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::Validation { .. }) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::AssetMissing(msg)) => {
                tracing::error!(error = %msg, "Template asset missing");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Exec(ExecError::Remote(remote)) => {
                tracing::error!(error = %remote, "Remote slides operation failed");
                match remote {
                    // Shape-resolution failures are our contract with
                    // the service breaking down, not a user mistake.
                    SlidesApiError::ShapeResolution(_) => StatusCode::BAD_GATEWAY,
                    SlidesApiError::Auth(_) => StatusCode::BAD_GATEWAY,
                    SlidesApiError::Request(_) | SlidesApiError::Api { .. } => {
                        StatusCode::BAD_GATEWAY
                    }
                }
            }
            AppError::Exec(ExecError::UnresolvedHandle(handle)) => {
                tracing::error!(?handle, "Plan referenced an unresolved shape handle");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = json!({
            "success": false,
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
