//! Error translation from service errors to HTTP responses.

use crate::auth::ports::SessionDirectoryError;
use crate::board::services::BoardDeskError;
use crate::task::services::TaskCatalogError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Wire-level error for the HTTP surface.
///
/// Access violations and missing sessions share the unauthorized class
/// rather than splitting into 401 and 403; clients of the original API
/// treat both identically and re-authenticate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session, or the session may not touch the entity.
    #[error("Unauthorized")]
    Unauthorized,
    /// The entity does not exist for this session.
    #[error("{0}")]
    NotFound(String),
    /// The payload failed validation.
    #[error("{0}")]
    Validation(String),
    /// Something downstream broke.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "internal error on api surface");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<TaskCatalogError> for ApiError {
    fn from(err: TaskCatalogError) -> Self {
        match err {
            TaskCatalogError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskCatalogError::NotFound(_) => Self::NotFound("Task not found".to_owned()),
            TaskCatalogError::UnknownBoard(board) => {
                Self::Validation(format!("board {board} does not exist"))
            }
            TaskCatalogError::Repository(inner) => Self::Internal(inner.to_string()),
            TaskCatalogError::BoardRepository(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<BoardDeskError> for ApiError {
    fn from(err: BoardDeskError) -> Self {
        match err {
            BoardDeskError::Domain(domain) => Self::Validation(domain.to_string()),
            BoardDeskError::NotFound(_) => Self::NotFound("Board not found".to_owned()),
            BoardDeskError::Unauthorized(_) => Self::Unauthorized,
            BoardDeskError::Repository(inner) => Self::Internal(inner.to_string()),
            BoardDeskError::TaskRepository(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<SessionDirectoryError> for ApiError {
    fn from(err: SessionDirectoryError) -> Self {
        Self::Internal(err.to_string())
    }
}
