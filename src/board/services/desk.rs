//! Service layer for board management and the board detail view.
//!
//! Provides [`BoardDeskService`] which coordinates board CRUD and assembles
//! the detail payload (board plus its tasks) the board view renders from.
//!
//! Access rules preserved from the original application: a board is
//! readable by its owner or any member. An access violation surfaces as
//! [`BoardDeskError::Unauthorized`], the same class as a missing session,
//! deliberately not a distinct forbidden case.

use crate::auth::domain::Session;
use crate::board::domain::{Board, BoardChanges, BoardDomainError, BoardDraft, BoardId};
use crate::board::ports::{BoardRepository, BoardRepositoryError};
use crate::task::domain::Task;
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Board plus the tasks rendered on it. Containers never own tasks; this is
/// a transfer snapshot, not a per-column partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDetail {
    /// The board aggregate.
    pub board: Board,
    /// Tasks on the board, most recently created first.
    pub tasks: Vec<Task>,
}

/// Service-level errors for board desk operations.
#[derive(Debug, Error)]
pub enum BoardDeskError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Board repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// Task repository operation failed while assembling a detail view or
    /// cascading a delete.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
    /// The board does not exist.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// The requester is neither the owner nor a member.
    #[error("not authorized for board {0}")]
    Unauthorized(BoardId),
}

/// Result type for board desk operations.
pub type BoardDeskResult<T> = Result<T, BoardDeskError>;

/// Board management orchestration service.
pub struct BoardDeskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> Clone for BoardDeskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, T, C> BoardDeskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new board desk service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            boards,
            tasks,
            clock,
        }
    }

    /// Returns every board the session's user owns or is a member of.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDeskError::Repository`] when the lookup fails.
    pub async fn list_boards(&self, session: &Session) -> BoardDeskResult<Vec<Board>> {
        Ok(self.boards.list_for_user(session.user_id()).await?)
    }

    /// Returns one board with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDeskError::NotFound`] when the board is absent and
    /// [`BoardDeskError::Unauthorized`] when the requester is neither owner
    /// nor member.
    pub async fn get_board(&self, session: &Session, id: BoardId) -> BoardDeskResult<BoardDetail> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or(BoardDeskError::NotFound(id))?;
        if !board.can_view(session.user_id()) {
            return Err(BoardDeskError::Unauthorized(id));
        }

        let tasks = self.tasks.list_by_board(id).await?;
        Ok(BoardDetail { board, tasks })
    }

    /// Creates a board owned by the session's user, with the default
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDeskError::Domain`] when validation fails.
    pub async fn create_board(&self, session: &Session, draft: BoardDraft) -> BoardDeskResult<Board> {
        let board = Board::create(draft, session.user_id(), &*self.clock)?;
        self.boards.insert(&board).await?;
        Ok(board)
    }

    /// Applies a sparse change set to a board. Owner-only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDeskError::NotFound`] when the board is absent and
    /// [`BoardDeskError::Unauthorized`] when the requester is not the
    /// owner.
    pub async fn update_board(
        &self,
        session: &Session,
        id: BoardId,
        changes: BoardChanges,
    ) -> BoardDeskResult<Board> {
        let mut board = self.find_owned(session, id).await?;
        board.apply_changes(changes, &*self.clock)?;
        self.boards.save(&board).await?;
        Ok(board)
    }

    /// Deletes a board and every task on it. Owner-only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDeskError::NotFound`] when the board is absent and
    /// [`BoardDeskError::Unauthorized`] when the requester is not the
    /// owner.
    pub async fn delete_board(&self, session: &Session, id: BoardId) -> BoardDeskResult<()> {
        let board = self.find_owned(session, id).await?;
        self.tasks.delete_by_board(board.id()).await?;
        self.boards.delete(board.id()).await?;
        Ok(())
    }

    /// Looks up a board and enforces the owner-only scope.
    async fn find_owned(&self, session: &Session, id: BoardId) -> BoardDeskResult<Board> {
        let board = self
            .boards
            .find_by_id(id)
            .await?
            .ok_or(BoardDeskError::NotFound(id))?;
        if board.owner_id() != session.user_id() {
            return Err(BoardDeskError::Unauthorized(id));
        }
        Ok(board)
    }
}
