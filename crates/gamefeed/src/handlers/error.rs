use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gamefeed_core::status::MessageResponse;
use gamefeed_core::storage::{repository_error_to_status_code, RepositoryError};
use gamefeed_core::validation::ValidationError;

use crate::services::ServiceError;

/// Handler error that renders as a `{"msg": ...}` body with a status code.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let repo_error = match self.0.downcast_ref::<ServiceError>() {
            Some(ServiceError::Validation(_)) => return StatusCode::BAD_REQUEST,
            Some(ServiceError::Repository(e)) => Some(e),
            None => self.0.downcast_ref::<RepositoryError>(),
        };

        if let Some(repo_error) = repo_error {
            let code = repository_error_to_status_code(repo_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }

        if self.0.downcast_ref::<ValidationError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let msg = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %msg, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %msg, "Request rejected");
        }

        (status, Json(MessageResponse::new(msg))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
