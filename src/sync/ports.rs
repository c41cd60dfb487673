//! Port contract for the remote task store.

use crate::board::domain::BoardId;
use crate::board::services::BoardDetail;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote store operations.
pub type RemoteStoreResult<T> = Result<T, RemoteStoreError>;

/// The authoritative HTTP+JSON backend, as seen from the client.
///
/// The client only ever holds a cached copy of what this store returns;
/// every mutating action is followed by either an optimistic patch or a
/// full re-fetch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTaskStore: Send + Sync {
    /// Fetches all tasks owned by the current session, most recently
    /// created first.
    async fn fetch_tasks(&self) -> RemoteStoreResult<Vec<Task>>;

    /// Fetches one board with its columns and tasks.
    async fn fetch_board(&self, id: BoardId) -> RemoteStoreResult<BoardDetail>;

    /// Creates a task from a draft and returns the stored aggregate.
    async fn create_task(&self, draft: TaskDraft) -> RemoteStoreResult<Task>;

    /// Applies a sparse update to one task and returns the stored
    /// aggregate.
    async fn update_task(&self, id: &TaskId, update: TaskUpdate) -> RemoteStoreResult<Task>;

    /// Deletes one task; the store cascades to its subtasks.
    async fn delete_task(&self, id: &TaskId) -> RemoteStoreResult<()>;
}

/// Errors surfaced by remote store adapters.
#[derive(Debug, Clone, Error)]
pub enum RemoteStoreError {
    /// The session is absent, expired, or lacks access.
    #[error("unauthorized")]
    Unauthorized,

    /// The entity does not exist on the server.
    #[error("not found")]
    NotFound,

    /// The server rejected the request with some other status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body could not be decoded into domain types.
    #[error("invalid payload: {0}")]
    InvalidPayload(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a payload decoding error.
    pub fn invalid_payload(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPayload(Arc::new(err))
    }

    /// Maps an HTTP status code to the error taxonomy.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }
}
