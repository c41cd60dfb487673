//! Handlers for the `/api/tasks` routes.

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::auth::domain::Session;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskUpdate};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;

/// Creation responses wrap the stored task in a `data` envelope.
#[derive(Debug, Serialize)]
pub(crate) struct CreatedTask {
    data: Task,
}

pub(crate) async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks().list_tasks(&session).await?;
    Ok(Json(tasks))
}

pub(crate) async fn create(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTask>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let task = state.tasks().create_task(&session, draft).await?;
    Ok((StatusCode::CREATED, Json(CreatedTask { data: task })))
}

pub(crate) async fn fetch(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks().get_task(&session, &id).await?;
    Ok(Json(task))
}

pub(crate) async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<TaskId>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(update) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let task = state.tasks().update_task(&session, &id, update).await?;
    Ok(Json(task))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<TaskId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.tasks().delete_task(&session, &id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
