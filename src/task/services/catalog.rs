//! Service layer for session-scoped task CRUD.
//!
//! Provides [`TaskCatalogService`] which coordinates task creation, lookup,
//! sparse updates, and deletion, always scoped to the requesting session's
//! user. A task owned by someone else is indistinguishable from an absent
//! one: both surface as [`TaskCatalogError::NotFound`].

use crate::auth::domain::Session;
use crate::board::domain::BoardId;
use crate::board::ports::{BoardRepository, BoardRepositoryError};
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskUpdate};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task catalog operations.
#[derive(Debug, Error)]
pub enum TaskCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Board repository operation failed while validating a draft.
    #[error(transparent)]
    BoardRepository(#[from] BoardRepositoryError),
    /// The task does not exist for the requesting user.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The draft references a board that does not exist.
    #[error("unknown board: {0}")]
    UnknownBoard(BoardId),
}

/// Result type for task catalog operations.
pub type TaskCatalogResult<T> = Result<T, TaskCatalogError>;

/// Session-scoped task CRUD orchestration service.
pub struct TaskCatalogService<R, B, C>
where
    R: TaskRepository + ?Sized,
    B: BoardRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    tasks: Arc<R>,
    boards: Arc<B>,
    clock: Arc<C>,
}

impl<R, B, C> Clone for TaskCatalogService<R, B, C>
where
    R: TaskRepository + ?Sized,
    B: BoardRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            boards: Arc::clone(&self.boards),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, B, C> TaskCatalogService<R, B, C>
where
    R: TaskRepository + ?Sized,
    B: BoardRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new task catalog service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, boards: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            boards,
            clock,
        }
    }

    /// Returns all tasks owned by the session's user, most recently created
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, session: &Session) -> TaskCatalogResult<Vec<Task>> {
        Ok(self.tasks.list_by_owner(session.user_id()).await?)
    }

    /// Returns one task owned by the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::NotFound`] when the task is absent or
    /// owned by someone else.
    pub async fn get_task(&self, session: &Session, id: &TaskId) -> TaskCatalogResult<Task> {
        self.find_owned(session, id).await
    }

    /// Creates a task from a draft.
    ///
    /// The referenced board must exist; priority defaults to medium and
    /// status always starts at to-do.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::UnknownBoard`] for a dangling board
    /// reference or [`TaskCatalogError::Domain`] when validation fails.
    pub async fn create_task(&self, session: &Session, draft: TaskDraft) -> TaskCatalogResult<Task> {
        let board_id = draft.board_id();
        if self.boards.find_by_id(board_id).await?.is_none() {
            return Err(TaskCatalogError::UnknownBoard(board_id));
        }

        let task = Task::create(draft, session.user_id(), &*self.clock)?;
        self.tasks.insert(&task).await?;
        Ok(task)
    }

    /// Applies a sparse update to one task owned by the session's user.
    ///
    /// A present `subtasks` collection replaces the embedded subtasks
    /// wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::NotFound`] when the task is absent or
    /// foreign, or [`TaskCatalogError::Domain`] when validation fails.
    pub async fn update_task(
        &self,
        session: &Session,
        id: &TaskId,
        update: TaskUpdate,
    ) -> TaskCatalogResult<Task> {
        let mut task = self.find_owned(session, id).await?;
        task.apply_update(update, &*self.clock)?;
        self.tasks.save(&task).await?;
        Ok(task)
    }

    /// Deletes one task owned by the session's user, cascading to its
    /// subtasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::NotFound`] when the task is absent or
    /// foreign.
    pub async fn delete_task(&self, session: &Session, id: &TaskId) -> TaskCatalogResult<()> {
        let task = self.find_owned(session, id).await?;
        self.tasks.delete(task.id()).await?;
        Ok(())
    }

    /// Looks up a task and enforces the ownership scope.
    async fn find_owned(&self, session: &Session, id: &TaskId) -> TaskCatalogResult<Task> {
        let task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskCatalogError::NotFound(id.clone()))?;
        if task.owner_id() != session.user_id() {
            return Err(TaskCatalogError::NotFound(id.clone()));
        }
        Ok(task)
    }
}
