//! HTTP surface for the Corkboard backend.
//!
//! Thin axum handlers over the task catalog and board desk services. Every
//! `/api` route resolves the bearer token to a [`Session`] before touching
//! a service; the handlers themselves only translate between wire payloads
//! and service calls.

mod boards;
mod error;
mod extract;
mod tasks;

pub use error::ApiError;

use crate::auth::ports::SessionDirectory;
use crate::board::ports::BoardRepository;
use crate::board::services::BoardDeskService;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskCatalogService;
use axum::routing::get;
use axum::{Json, Router};
use mockable::Clock;
use serde_json::json;
use std::sync::Arc;

/// Task catalog service over trait-object collaborators, as held by the
/// router state.
pub type DynTaskCatalog =
    TaskCatalogService<dyn TaskRepository, dyn BoardRepository, dyn Clock + Send + Sync>;

/// Board desk service over trait-object collaborators, as held by the
/// router state.
pub type DynBoardDesk =
    BoardDeskService<dyn BoardRepository, dyn TaskRepository, dyn Clock + Send + Sync>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<dyn SessionDirectory>,
    tasks: DynTaskCatalog,
    boards: DynBoardDesk,
}

impl AppState {
    /// Bundles the session directory and services for the router.
    #[must_use]
    pub const fn new(
        sessions: Arc<dyn SessionDirectory>,
        tasks: DynTaskCatalog,
        boards: DynBoardDesk,
    ) -> Self {
        Self {
            sessions,
            tasks,
            boards,
        }
    }

    pub(crate) fn sessions(&self) -> &dyn SessionDirectory {
        &*self.sessions
    }

    pub(crate) const fn tasks(&self) -> &DynTaskCatalog {
        &self.tasks
    }

    pub(crate) const fn boards(&self) -> &DynBoardDesk {
        &self.boards
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            get(tasks::fetch)
                .put(tasks::update)
                .patch(tasks::update)
                .delete(tasks::remove),
        )
        .route("/api/boards", get(boards::list).post(boards::create))
        .route(
            "/api/boards/{id}",
            get(boards::fetch)
                .put(boards::update)
                .patch(boards::update)
                .delete(boards::remove),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
