//! Port contracts for board persistence.

mod repository;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
