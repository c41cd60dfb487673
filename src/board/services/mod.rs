//! Orchestration services for the board module.

mod desk;

pub use desk::{BoardDeskError, BoardDeskResult, BoardDeskService, BoardDetail};
