//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identity must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A subtask title is empty after trimming.
    #[error("subtask title must not be empty")]
    EmptySubtaskTitle,

    /// The attachment name is empty after trimming.
    #[error("attachment name must not be empty")]
    EmptyAttachmentName,

    /// The progress percentage exceeds 100.
    #[error("progress {0} exceeds 100 percent")]
    ProgressOutOfRange(u8),
}

/// Error returned while parsing a task status from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a recurrence cadence from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown recurrence cadence: {0}")]
pub struct ParseRecurrenceError(pub String);
