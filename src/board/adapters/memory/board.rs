//! Thread-safe in-memory board repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::board::domain::{Board, BoardId};
use crate::board::ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};

/// In-memory stand-in for the relational board store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<HashMap<BoardId, Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn insert(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        state.insert(board.id(), board.clone());
        Ok(())
    }

    async fn save(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.contains_key(&board.id()) {
            return Err(BoardRepositoryError::NotFound(board.id()));
        }
        state.insert(board.id(), board.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_for_user(&self, user: UserId) -> BoardRepositoryResult<Vec<Board>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut boards: Vec<Board> = state
            .values()
            .filter(|board| board.can_view(user))
            .cloned()
            .collect();
        boards.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
        });
        Ok(boards)
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(BoardRepositoryError::NotFound(id))
    }
}
