//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// A column name is empty after trimming.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// Two columns on the same board share a name, which would break the
    /// name-keyed container lookup.
    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),
}
