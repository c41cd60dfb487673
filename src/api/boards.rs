//! Handlers for the `/api/boards` routes.

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::auth::domain::Session;
use crate::board::domain::{Board, BoardChanges, BoardDraft, BoardId};
use crate::board::services::BoardDetail;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;

pub(crate) async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Board>>, ApiError> {
    let boards = state.boards().list_boards(&session).await?;
    Ok(Json(boards))
}

pub(crate) async fn create(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<BoardDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Board>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let board = state.boards().create_board(&session, draft).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub(crate) async fn fetch(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<BoardId>,
) -> Result<Json<BoardDetail>, ApiError> {
    let detail = state.boards().get_board(&session, id).await?;
    Ok(Json(detail))
}

pub(crate) async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<BoardId>,
    payload: Result<Json<BoardChanges>, JsonRejection>,
) -> Result<Json<Board>, ApiError> {
    let Json(changes) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let board = state.boards().update_board(&session, id, changes).await?;
    Ok(Json(board))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<BoardId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.boards().delete_board(&session, id).await?;
    Ok(Json(json!({ "message": "Board deleted successfully" })))
}
