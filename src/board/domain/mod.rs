//! Domain model for boards and their columns.

mod board;
mod error;
mod ids;

pub use board::{Board, BoardChanges, BoardDraft, Column, DEFAULT_COLUMN_NAMES};
pub use error::BoardDomainError;
pub use ids::{BoardId, ColumnId};
