//! Subtasks embedded in a task aggregate.

use super::{Progress, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// Reduced task-shaped record owned by a parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    id: TaskId,
    title: String,
    completed: bool,
}

impl Subtask {
    /// Creates a subtask with a freshly minted identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubtaskTitle`] when the title is
    /// empty after trimming.
    pub fn new(title: impl Into<String>, completed: bool) -> Result<Self, TaskDomainError> {
        let value = title.into();
        if value.trim().is_empty() {
            return Err(TaskDomainError::EmptySubtaskTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            title: value,
            completed,
        })
    }

    /// Materializes a subtask from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubtaskTitle`] when the draft title
    /// is empty after trimming.
    pub fn from_draft(draft: &SubtaskDraft) -> Result<Self, TaskDomainError> {
        Self::new(draft.title.clone(), draft.completed)
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the subtask title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the subtask is complete.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the progress the subtask contributes when materialized as a
    /// task row: complete subtasks carry 100, pending ones 0.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        if self.completed {
            Progress::COMPLETE
        } else {
            Progress::ZERO
        }
    }
}

/// Creation payload for one subtask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskDraft {
    /// Subtask title.
    pub title: String,
    /// Whether the subtask starts complete.
    #[serde(default)]
    pub completed: bool,
}

impl SubtaskDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}
