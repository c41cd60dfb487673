//! Task aggregate root.

use super::{
    Attachment, Progress, Recurrence, Subtask, SubtaskDraft, TaskDomainError, TaskId,
    TaskPriority, TaskStatus, TaskUpdate,
};
use crate::auth::domain::UserId;
use crate::board::domain::BoardId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Subtasks and attachment references are embedded in the aggregate, so
/// deleting a task cascades to them by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    board_id: BoardId,
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    recurring: Option<Recurrence>,
    progress: Progress,
    subtasks: Vec<Subtask>,
    attachments: Vec<Attachment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a creation payload.
    ///
    /// Priority defaults to [`TaskPriority::Medium`] and status always
    /// starts at [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming, or [`TaskDomainError::EmptySubtaskTitle`] when a
    /// subtask draft carries an empty title.
    pub fn create(
        draft: TaskDraft,
        owner_id: UserId,
        clock: &(impl Clock + ?Sized),
    ) -> Result<Self, TaskDomainError> {
        let TaskDraft {
            title,
            description,
            priority,
            due_date,
            recurring,
            subtasks,
            board_id,
        } = draft;

        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let subtasks = subtasks
            .iter()
            .map(Subtask::from_draft)
            .collect::<Result<Vec<_>, _>>()?;

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            owner_id,
            board_id,
            title,
            description,
            priority: priority.unwrap_or_default(),
            status: TaskStatus::Todo,
            due_date,
            recurring,
            progress: Progress::ZERO,
            subtasks,
            attachments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the board the task belongs to.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the recurrence cadence, if one is set.
    #[must_use]
    pub const fn recurring(&self) -> Option<Recurrence> {
        self.recurring
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the embedded subtasks in order.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns the attachment references.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a sparse update to the aggregate.
    ///
    /// Present fields replace their counterparts; absent fields leave them
    /// untouched. A present `subtasks` collection replaces the embedded
    /// subtasks wholesale (delete-all-then-recreate, never a merge), so the
    /// resulting count always equals the payload's length.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for an empty replacement
    /// title or [`TaskDomainError::EmptySubtaskTitle`] for an empty subtask
    /// title; the aggregate is left unchanged on error.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        clock: &(impl Clock + ?Sized),
    ) -> Result<(), TaskDomainError> {
        if let Some(title) = &update.title
            && title.trim().is_empty()
        {
            return Err(TaskDomainError::EmptyTitle);
        }
        let replacement_subtasks = update
            .subtasks
            .as_ref()
            .map(|drafts| {
                drafts
                    .iter()
                    .map(Subtask::from_draft)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(recurring) = update.recurring {
            self.recurring = recurring;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(subtasks) = replacement_subtasks {
            self.subtasks = subtasks;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Overwrites the workflow status without touching timestamps.
    ///
    /// Used by the client view for optimistic patches; authoritative
    /// timestamps arrive with the next fetch.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Overwrites the due date without touching timestamps.
    ///
    /// Used by the client view for optimistic patches; authoritative
    /// timestamps arrive with the next fetch.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Records an attachment reference against the task.
    pub fn attach(&mut self, attachment: Attachment, clock: &(impl Clock + ?Sized)) {
        self.attachments.push(attachment);
        self.updated_at = clock.utc();
    }
}

/// Creation payload for a new task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    priority: Option<TaskPriority>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    recurring: Option<Recurrence>,
    #[serde(default)]
    subtasks: Vec<SubtaskDraft>,
    board_id: BoardId,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, board_id: BoardId) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: None,
            due_date: None,
            recurring: None,
            subtasks: Vec::new(),
            board_id,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets an explicit priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the recurrence cadence.
    #[must_use]
    pub const fn with_recurring(mut self, recurring: Recurrence) -> Self {
        self.recurring = Some(recurring);
        self
    }

    /// Sets the subtask drafts.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = SubtaskDraft>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the board the task will be created on.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }
}
